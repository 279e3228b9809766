//! Iterator extension for materializing in method position.

use segdrain_buffer::Materializer;
use segdrain_core::{LengthHint, MaterializeError};

use crate::shared::{share, SharedBuffer};

/// Materialize any iterator into a [`SharedBuffer`].
///
/// ```
/// use segdrain_typed::MaterializeExt;
///
/// let squares = (1..=4).map(|x| x * x).materialize().unwrap();
/// assert_eq!(&*squares, &[1, 4, 9, 16]);
/// ```
pub trait MaterializeExt: Iterator + Sized {
    /// Materialize, estimating the length from `size_hint`.
    ///
    /// Exact-size iterators hit the single-allocation fast path.
    ///
    /// # Errors
    ///
    /// Only [`MaterializeError::AllocationFailed`].
    fn materialize(self) -> Result<SharedBuffer<Self::Item>, MaterializeError>
    where
        Self::Item: Clone,
    {
        let hint = LengthHint::of(&self);
        self.materialize_with_hint(hint)
    }

    /// Materialize with an explicit length estimate.
    ///
    /// # Errors
    ///
    /// Only [`MaterializeError::AllocationFailed`].
    fn materialize_with_hint(
        self,
        hint: LengthHint,
    ) -> Result<SharedBuffer<Self::Item>, MaterializeError>
    where
        Self::Item: Clone,
    {
        let materialized = Materializer::default().drain(self, hint)?;
        Ok(share(materialized.into_buffer()))
    }
}

impl<I: Iterator> MaterializeExt for I {}
