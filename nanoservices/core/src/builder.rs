use siftflow_utils::SiftResult;

use crate::capabilities::{Selector, Sink, Transform};
use crate::pipeline;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("a selector is required")]
    NoSelector,
    #[error("a transform is required (use capabilities::identity for a pass-through)")]
    NoTransform,
    #[error("a sink is required")]
    NoSink,
}

/// Assembles a reusable [`Pipeline`] from the three capabilities.
///
/// Every stage must be supplied explicitly; a pipeline with no mapping step
/// names [`crate::capabilities::identity`] at the call site rather than
/// relying on a default.
pub struct PipelineBuilder<X, Y> {
    name: String,
    selector: Option<Box<dyn Selector<X>>>,
    transform: Option<Box<dyn Transform<X, Y>>>,
    sink: Option<Box<dyn Sink<Y>>>,
}

impl<X, Y> PipelineBuilder<X, Y> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: None,
            transform: None,
            sink: None,
        }
    }

    pub fn selector(mut self, selector: impl Selector<X> + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    pub fn transform(mut self, transform: impl Transform<X, Y> + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn sink(mut self, sink: impl Sink<Y> + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<Pipeline<X, Y>, BuildError> {
        let selector = self.selector.ok_or(BuildError::NoSelector)?;
        let transform = self.transform.ok_or(BuildError::NoTransform)?;
        let sink = self.sink.ok_or(BuildError::NoSink)?;

        tracing::debug!(pipeline = %self.name, "pipeline assembled");

        Ok(Pipeline {
            name: self.name,
            selector,
            transform,
            sink,
        })
    }
}

/// A named selector→transform→sink composition over boxed capabilities.
///
/// Holds no traversal state between runs; calling [`Pipeline::run`] twice
/// with the same source and stateless capabilities produces the same sink
/// invocations twice.
pub struct Pipeline<X, Y> {
    name: String,
    selector: Box<dyn Selector<X>>,
    transform: Box<dyn Transform<X, Y>>,
    sink: Box<dyn Sink<Y>>,
}

impl<X, Y> Pipeline<X, Y> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One full pass of `source` through the composition.
    pub fn run(&mut self, source: impl IntoIterator<Item = X>) -> SiftResult<()> {
        pipeline::drive(
            source.into_iter(),
            self.selector.as_mut(),
            self.transform.as_mut(),
            self.sink.as_mut(),
        )
    }
}
