pub mod traits;

pub use traits::{identity, Selector, Sink, Transform, TryMap, TrySelect, TrySink};
