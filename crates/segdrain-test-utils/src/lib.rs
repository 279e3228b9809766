//! Test producers and fixtures for segdrain development.
//!
//! Provides instrumented producers ([`CountingProducer`],
//! [`FailingProducer`]) and a [`DropTracker`] for checking that every
//! element pulled during an aborted call is dropped exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::rc::Rc;

use segdrain_core::MaterializeError;

/// Shared view of how often a [`CountingProducer`] was pulled.
#[derive(Clone, Debug, Default)]
pub struct PullCounter {
    pulls: Rc<Cell<usize>>,
}

impl PullCounter {
    /// Number of `next()` calls that returned an element.
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }
}

/// Wraps an iterator, counting pulls and rejecting reuse after exhaustion.
///
/// Panics if `next()` is called again after it has returned `None`, so a
/// test fails loudly if the code under test treats the producer as
/// anything but single-pass.
pub struct CountingProducer<I> {
    inner: I,
    counter: PullCounter,
    exhausted: bool,
}

impl<I: Iterator> CountingProducer<I> {
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> (Self, PullCounter) {
        let counter = PullCounter::default();
        let producer = Self {
            inner: inner.into_iter(),
            counter: counter.clone(),
            exhausted: false,
        };
        (producer, counter)
    }
}

impl<I: Iterator> Iterator for CountingProducer<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        assert!(!self.exhausted, "producer pulled after exhaustion");
        match self.inner.next() {
            Some(item) => {
                self.counter.pulls.set(self.counter.pulls.get() + 1);
                Some(item)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Yields `Ok` for each value, replacing the element at `fail_at` with an error.
///
/// Elements after the failure are still available, so tests can check
/// that the consumer stops pulling at the first error.
pub struct FailingProducer<T> {
    values: std::vec::IntoIter<T>,
    index: usize,
    fail_at: usize,
    error: MaterializeError,
}

impl<T> FailingProducer<T> {
    pub fn new(values: Vec<T>, fail_at: usize, error: MaterializeError) -> Self {
        Self {
            values: values.into_iter(),
            index: 0,
            fail_at,
            error,
        }
    }
}

impl<T> Iterator for FailingProducer<T> {
    type Item = Result<T, MaterializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        let index = self.index;
        self.index += 1;
        if index == self.fail_at {
            return Some(Err(self.error.clone()));
        }
        Some(Ok(value))
    }
}

/// Counts creations and drops of [`Tracked`] values.
#[derive(Clone, Debug, Default)]
pub struct DropTracker {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is recorded.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            dropped: Rc::clone(&self.dropped),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value whose drop is counted by the [`DropTracker`] that created it.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    dropped: Rc<Cell<usize>>,
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}
