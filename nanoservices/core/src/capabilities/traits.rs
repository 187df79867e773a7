//! The three single-operation behaviors a pipeline is parameterized by.
//!
//! Plain closures satisfy these contracts through the blanket impls below, so
//! the usual call shape is `process_elements(roster, |p: &Person| p.age >= 18,
//! |p| p.email, |e| println!("{e}"))`. Capabilities capture by move: anything
//! a closure reads from its defining scope is owned (or exclusively borrowed)
//! for the duration of the pipeline call, so captured state cannot be mutated
//! behind the pipeline's back.
//!
//! A closure that can itself fail does not get a second blanket impl (the two
//! would be indistinguishable to coherence); wrap it in [`TrySelect`],
//! [`TryMap`], or [`TrySink`] to name the contract it serves.

use siftflow_utils::CapabilityError;

/// Decides whether an element proceeds through the pipeline.
pub trait Selector<X> {
    fn test(&mut self, x: &X) -> Result<bool, CapabilityError>;
}

/// Maps an accepted element to a derived value.
///
/// Must be total over the elements the selector accepts; a failure here
/// aborts the traversal and surfaces to the caller.
pub trait Transform<X, Y> {
    fn apply(&mut self, x: X) -> Result<Y, CapabilityError>;
}

/// Consumes a value for its side effect; the terminal stage.
pub trait Sink<Y> {
    fn accept(&mut self, y: Y) -> Result<(), CapabilityError>;
}

impl<X, F> Selector<X> for F
where
    F: FnMut(&X) -> bool,
{
    fn test(&mut self, x: &X) -> Result<bool, CapabilityError> {
        Ok(self(x))
    }
}

impl<X, Y, F> Transform<X, Y> for F
where
    F: FnMut(X) -> Y,
{
    fn apply(&mut self, x: X) -> Result<Y, CapabilityError> {
        Ok(self(x))
    }
}

impl<Y, F> Sink<Y> for F
where
    F: FnMut(Y),
{
    fn accept(&mut self, y: Y) -> Result<(), CapabilityError> {
        self(y);
        Ok(())
    }
}

/// A selector built from a fallible closure.
pub struct TrySelect<F>(pub F);

impl<X, F> Selector<X> for TrySelect<F>
where
    F: FnMut(&X) -> Result<bool, CapabilityError>,
{
    fn test(&mut self, x: &X) -> Result<bool, CapabilityError> {
        (self.0)(x)
    }
}

/// A transform built from a fallible closure.
pub struct TryMap<F>(pub F);

impl<X, Y, F> Transform<X, Y> for TryMap<F>
where
    F: FnMut(X) -> Result<Y, CapabilityError>,
{
    fn apply(&mut self, x: X) -> Result<Y, CapabilityError> {
        (self.0)(x)
    }
}

/// A sink built from a fallible closure.
pub struct TrySink<F>(pub F);

impl<Y, F> Sink<Y> for TrySink<F>
where
    F: FnMut(Y) -> Result<(), CapabilityError>,
{
    fn accept(&mut self, y: Y) -> Result<(), CapabilityError> {
        (self.0)(y)
    }
}

/// The identity transform, for pipelines with no mapping stage.
pub fn identity<X>() -> impl Transform<X, X> {
    |x: X| x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_satisfies_selector() {
        let mut adult = |age: &u32| *age >= 18;
        assert!(adult.test(&20).unwrap());
        assert!(!adult.test(&12).unwrap());
    }

    #[test]
    fn closure_satisfies_transform_and_sink() {
        let mut double = |x: u32| x * 2;
        assert_eq!(double.apply(21).unwrap(), 42);

        let mut seen = Vec::new();
        {
            let mut collect = |x: u32| seen.push(x);
            collect.accept(7).unwrap();
        }
        assert_eq!(seen, vec![7]);
    }

    #[test]
    fn named_struct_satisfies_selector() {
        struct EligibleForService;
        impl Selector<u32> for EligibleForService {
            fn test(&mut self, age: &u32) -> Result<bool, CapabilityError> {
                Ok((18..=25).contains(age))
            }
        }
        let mut sel = EligibleForService;
        assert!(sel.test(&25).unwrap());
        assert!(!sel.test(&26).unwrap());
    }

    #[test]
    fn try_adapters_propagate_failures() {
        let mut sel = TrySelect(|x: &u32| -> Result<bool, CapabilityError> {
            if *x == 0 {
                Err("zero is not classifiable".into())
            } else {
                Ok(*x % 2 == 0)
            }
        });
        assert!(sel.test(&4).unwrap());
        assert!(sel.test(&0).is_err());

        let mut sink = TrySink(|_: u32| Err::<(), CapabilityError>("full".into()));
        assert!(sink.accept(1).is_err());
    }

    #[test]
    fn identity_returns_its_input() {
        let mut id = identity::<&str>();
        assert_eq!(id.apply("e1").unwrap(), "e1");
    }

    #[test]
    fn selector_may_capture_state() {
        let mut calls = 0u32;
        {
            let mut counting = |_: &u32| {
                calls += 1;
                true
            };
            counting.test(&1).unwrap();
            counting.test(&2).unwrap();
        }
        assert_eq!(calls, 2);
    }
}
