//! Uninitialised result buffer filled from the back.
//!
//! The merge knows the exact result length up front but receives the
//! segments tail-first, so it writes into `MaybeUninit` slots instead of
//! pushing into a `Vec`. Initialised slots always form the suffix
//! `slots[front..]`.

#![allow(unsafe_code)]

use std::mem::{self, MaybeUninit};

use segdrain_core::MaterializeError;

pub(crate) struct BackFill<T> {
    slots: Box<[MaybeUninit<T>]>,
    /// Lowest initialised index; everything at or above it is written.
    front: usize,
}

impl<T> BackFill<T> {
    /// Reserve `len` uninitialised slots.
    pub(crate) fn new(len: usize) -> Result<Self, MaterializeError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| MaterializeError::AllocationFailed { requested: len })?;
        slots.resize_with(len, MaybeUninit::uninit);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            front: len,
        })
    }

    /// Move `block` into the slots directly in front of the written suffix.
    ///
    /// Returns the number of elements moved.
    ///
    /// # Panics
    ///
    /// Panics if `block` is longer than the number of unwritten slots.
    pub(crate) fn prepend(&mut self, block: Vec<T>) -> usize {
        let len = block.len();
        assert!(
            len <= self.front,
            "block of {len} elements overflows {} free slots",
            self.front
        );
        let start = self.front - len;
        for (slot, value) in self.slots[start..self.front].iter_mut().zip(block) {
            slot.write(value);
        }
        self.front = start;
        len
    }

    /// Number of slots not yet written.
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        self.front
    }

    /// Expose the buffer once every slot has been written.
    ///
    /// # Panics
    ///
    /// Panics if any slot is still uninitialised.
    pub(crate) fn finish(mut self) -> Box<[T]> {
        assert_eq!(
            self.front, 0,
            "merge left {} slots unwritten",
            self.front
        );
        let slots = mem::take(&mut self.slots);
        // SAFETY: `front == 0`, so every slot in `slots[0..]` was written
        // by `prepend`, and none has been read out since.
        unsafe { slots.assume_init() }
    }
}

impl<T> Drop for BackFill<T> {
    fn drop(&mut self) {
        for slot in &mut self.slots[self.front..] {
            // SAFETY: slots at or above `front` were initialised by
            // `prepend` and are dropped exactly once here. After `finish`
            // the slots are empty and this loop does nothing.
            unsafe { slot.assume_init_drop() };
        }
    }
}
