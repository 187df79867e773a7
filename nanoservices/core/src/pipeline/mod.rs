//! The fused filter→map→consume engine.
//!
//! One pass over the source, in order, one element at a time. Each element is
//! fully handled (selected, transformed, consumed) before the next is pulled,
//! so nothing is buffered and an arbitrarily large source never costs more
//! than one element of working memory.

pub mod stages;

use siftflow_utils::error::Error;
use siftflow_utils::{SiftResult, Stage};

use crate::capabilities::{identity, Selector, Sink, Transform};

/// Drive every element of `source` through selector → transform → sink.
///
/// Elements the selector rejects are skipped with no further work. The sink
/// observes accepted elements in source order. The first capability failure
/// aborts the traversal; elements after it are never visited.
pub fn process_elements<X, Y, I, S, T, K>(
    source: I,
    mut selector: S,
    mut transform: T,
    mut sink: K,
) -> SiftResult<()>
where
    I: IntoIterator<Item = X>,
    S: Selector<X>,
    T: Transform<X, Y>,
    K: Sink<Y>,
{
    drive(source.into_iter(), &mut selector, &mut transform, &mut sink)
}

/// [`process_elements`] without a mapping stage: accepted elements reach the
/// sink unchanged.
pub fn for_each_matching<X, I, S, K>(source: I, selector: S, sink: K) -> SiftResult<()>
where
    I: IntoIterator<Item = X>,
    S: Selector<X>,
    K: Sink<X>,
{
    process_elements(source, selector, identity(), sink)
}

/// The single traversal loop, shared by the free functions above and by
/// [`crate::builder::Pipeline::run`].
pub(crate) fn drive<X, Y>(
    source: impl Iterator<Item = X>,
    selector: &mut dyn Selector<X>,
    transform: &mut dyn Transform<X, Y>,
    sink: &mut dyn Sink<Y>,
) -> SiftResult<()> {
    for (index, element) in source.enumerate() {
        let selected = selector
            .test(&element)
            .map_err(|e| Error::capability(Stage::Selector, index, e))?;
        if !selected {
            continue;
        }
        let value = transform
            .apply(element)
            .map_err(|e| Error::capability(Stage::Transform, index, e))?;
        sink.accept(value)
            .map_err(|e| Error::capability(Stage::Sink, index, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{TrySelect, TrySink};
    use siftflow_utils::CapabilityError;

    #[test]
    fn keeps_source_order() {
        let mut log = Vec::new();
        process_elements(
            vec![15u32, 18, 25, 26, 20],
            |age: &u32| (18..=25).contains(age),
            |age: u32| age,
            |age: u32| log.push(age),
        )
        .unwrap();
        assert_eq!(log, vec![18, 25, 20]);
    }

    #[test]
    fn transform_runs_only_on_accepted_elements() {
        let mut transformed = Vec::new();
        let mut emitted = Vec::new();
        process_elements(
            0..6u32,
            |x: &u32| x % 2 == 0,
            |x: u32| {
                transformed.push(x);
                x * 10
            },
            |x: u32| emitted.push(x),
        )
        .unwrap();
        assert_eq!(transformed, vec![0, 2, 4]);
        assert_eq!(emitted, vec![0, 20, 40]);
    }

    #[test]
    fn for_each_matching_skips_mapping() {
        let mut log = Vec::new();
        for_each_matching(vec!["a", "bb", "ccc"], |s: &&str| s.len() > 1, |s: &'static str| {
            log.push(s)
        })
        .unwrap();
        assert_eq!(log, vec!["bb", "ccc"]);
    }

    #[test]
    fn selector_failure_carries_index() {
        let err = process_elements(
            vec![1u32, 2, 3],
            TrySelect(|x: &u32| -> Result<bool, CapabilityError> {
                if *x == 2 {
                    Err("unclassifiable".into())
                } else {
                    Ok(true)
                }
            }),
            |x: u32| x,
            |_: u32| {},
        )
        .unwrap_err();
        assert_eq!(err.stage(), Stage::Selector);
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn sink_failure_stops_the_traversal() {
        let mut visited = Vec::new();
        let mut accepted = 0u32;
        let err = process_elements(
            vec![1u32, 2, 3, 4],
            |x: &u32| {
                visited.push(*x);
                true
            },
            |x: u32| x,
            TrySink(|_: u32| -> Result<(), CapabilityError> {
                accepted += 1;
                if accepted == 2 {
                    Err("sink full".into())
                } else {
                    Ok(())
                }
            }),
        )
        .unwrap_err();
        assert_eq!(err.stage(), Stage::Sink);
        assert_eq!(err.index(), 1);
        // Elements after the failing one were never offered to the selector.
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut log: Vec<u32> = Vec::new();
        process_elements(Vec::<u32>::new(), |_: &u32| true, |x: u32| x, |x: u32| log.push(x)).unwrap();
        assert!(log.is_empty());
    }
}
