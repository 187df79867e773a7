use std::fmt;
use thiserror::Error;

/// Failure raised by a caller-supplied capability (selector, transform, or sink).
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync>;

/// Which pipeline stage a capability failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Selector,
    Transform,
    Sink,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Selector => write!(f, "selector"),
            Stage::Transform => write!(f, "transform"),
            Stage::Sink => write!(f, "sink"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A capability failed mid-traversal. `index` is the zero-based position
    /// of the element in the source; elements after it were never visited.
    #[error("{stage} failed on element {index}: {source}")]
    Capability {
        stage: Stage,
        index: usize,
        #[source]
        source: CapabilityError,
    },
}

impl Error {
    pub fn capability(stage: Stage, index: usize, source: CapabilityError) -> Self {
        Error::Capability { stage, index, source }
    }

    /// The stage the failure originated from.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Capability { stage, .. } => *stage,
        }
    }

    /// Zero-based position of the element being processed when the failure occurred.
    pub fn index(&self) -> usize {
        match self {
            Error::Capability { index, .. } => *index,
        }
    }
}
