//! Pull-based stage combinators: the engine of [`super::process_elements`]
//! decomposed into independently reusable pieces.
//!
//! A chain is assembled left to right and pulls one element at a time:
//!
//! ```
//! use siftflow_core::pipeline::stages::{stream, ElementStream};
//!
//! let mut emails = Vec::new();
//! stream(vec![("fred", 25), ("bob", 12), ("jane", 30)])
//!     .filtered(|&(_, age): &(&str, u32)| age >= 18)
//!     .mapped(|(name, _): (&str, u32)| format!("{name}@example.com"))
//!     .drain(|e: String| emails.push(e))
//!     .unwrap();
//! assert_eq!(emails, vec!["fred@example.com", "jane@example.com"]);
//! ```
//!
//! Each stage counts the elements it has pulled from the stage below it, and
//! a failure reports that ordinal. The fused engine reports exact source
//! indices instead; use it when precise positions matter.

use std::marker::PhantomData;

use siftflow_utils::error::Error;
use siftflow_utils::{SiftResult, Stage};

use crate::capabilities::{Selector, Sink, Transform};

/// A lazy, finite producer of elements. Not restartable: after `pull`
/// returns `Ok(None)` or an error, the stream stays exhausted.
pub trait ElementStream {
    type Item;

    /// Produce the next element, `Ok(None)` at end of input.
    fn pull(&mut self) -> SiftResult<Option<Self::Item>>;

    /// Keep only elements the selector accepts.
    fn filtered<S>(self, selector: S) -> Filtered<Self, S>
    where
        S: Selector<Self::Item>,
        Self: Sized,
    {
        Filtered {
            inner: self,
            selector,
            pulled: 0,
            done: false,
        }
    }

    /// Map each element through the transform.
    fn mapped<T, Y>(self, transform: T) -> Mapped<Self, T, Y>
    where
        T: Transform<Self::Item, Y>,
        Self: Sized,
    {
        Mapped {
            inner: self,
            transform,
            pulled: 0,
            done: false,
            _out: PhantomData,
        }
    }

    /// Terminal stage: feed every remaining element to the sink, in order.
    fn drain<K>(mut self, mut sink: K) -> SiftResult<()>
    where
        K: Sink<Self::Item>,
        Self: Sized,
    {
        let mut pulled = 0usize;
        while let Some(item) = self.pull()? {
            sink.accept(item)
                .map_err(|e| Error::capability(Stage::Sink, pulled, e))?;
            pulled += 1;
        }
        Ok(())
    }
}

/// Wrap a finite in-memory source as the head of a stage chain.
pub fn stream<I: IntoIterator>(source: I) -> SourceStage<I::IntoIter> {
    SourceStage {
        iter: source.into_iter().fuse(),
    }
}

pub struct SourceStage<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> ElementStream for SourceStage<I> {
    type Item = I::Item;

    fn pull(&mut self) -> SiftResult<Option<Self::Item>> {
        Ok(self.iter.next())
    }
}

pub struct Filtered<P, S> {
    inner: P,
    selector: S,
    pulled: usize,
    done: bool,
}

impl<P, S> ElementStream for Filtered<P, S>
where
    P: ElementStream,
    S: Selector<P::Item>,
{
    type Item = P::Item;

    fn pull(&mut self) -> SiftResult<Option<Self::Item>> {
        if self.done {
            return Ok(None);
        }
        loop {
            let Some(item) = self.inner.pull()? else {
                self.done = true;
                return Ok(None);
            };
            let index = self.pulled;
            self.pulled += 1;
            let selected = self.selector.test(&item).map_err(|e| {
                self.done = true;
                Error::capability(Stage::Selector, index, e)
            })?;
            if selected {
                return Ok(Some(item));
            }
        }
    }
}

pub struct Mapped<P, T, Y> {
    inner: P,
    transform: T,
    pulled: usize,
    done: bool,
    _out: PhantomData<fn() -> Y>,
}

impl<P, T, Y> ElementStream for Mapped<P, T, Y>
where
    P: ElementStream,
    T: Transform<P::Item, Y>,
{
    type Item = Y;

    fn pull(&mut self) -> SiftResult<Option<Self::Item>> {
        if self.done {
            return Ok(None);
        }
        let Some(item) = self.inner.pull()? else {
            self.done = true;
            return Ok(None);
        };
        let index = self.pulled;
        self.pulled += 1;
        let value = self.transform.apply(item).map_err(|e| {
            self.done = true;
            Error::capability(Stage::Transform, index, e)
        })?;
        Ok(Some(value))
    }
}
