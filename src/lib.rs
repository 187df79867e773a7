pub use siftflow_core as core;
pub use siftflow_utils as utils;

// Convenience re-exports for common usage
pub use siftflow_core::builder::{Pipeline, PipelineBuilder};
pub use siftflow_core::capabilities::{identity, Selector, Sink, Transform};
pub use siftflow_core::pipeline::stages::{stream, ElementStream};
pub use siftflow_core::pipeline::{for_each_matching, process_elements};
pub use siftflow_utils::{CapabilityError, SiftResult, Stage};
