//! Caller-supplied estimates of producer length.

use std::fmt;

use crate::error::MaterializeError;

/// Estimated number of elements a producer will yield.
///
/// Zero means "no estimate". A hint never affects the contents of the
/// result, only how many segments are allocated and how many elements are
/// copied while merging them. An exact hint lets the materializer return
/// its first segment without copying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthHint(usize);

impl LengthHint {
    /// No estimate available.
    pub const UNKNOWN: Self = Self(0);

    /// Validate a signed hint.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializeError::NegativeHint`] if `hint < 0`.
    pub fn new(hint: i64) -> Result<Self, MaterializeError> {
        if hint < 0 {
            return Err(MaterializeError::NegativeHint { hint });
        }
        // Hints beyond the address space cannot be honoured anyway; the
        // allocation attempt reports them.
        Ok(Self(usize::try_from(hint).unwrap_or(usize::MAX)))
    }

    /// A hint of exactly `len` elements.
    pub const fn exact(len: usize) -> Self {
        Self(len)
    }

    /// Derive a hint from an iterator's `size_hint`.
    ///
    /// Uses the bound itself when both bounds agree, otherwise the lower
    /// bound (which is zero, i.e. unknown, for most adapters).
    pub fn of<I: Iterator + ?Sized>(iter: &I) -> Self {
        match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Self(upper),
            (lower, _) => Self(lower),
        }
    }

    /// The raw estimate.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether no estimate was given.
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// Capacity of the first segment: the hint itself, or `default` when unknown.
    pub const fn initial_capacity(self, default: usize) -> usize {
        if self.0 > 0 {
            self.0
        } else {
            default
        }
    }
}

impl From<usize> for LengthHint {
    fn from(len: usize) -> Self {
        Self(len)
    }
}

impl TryFrom<i64> for LengthHint {
    type Error = MaterializeError;

    fn try_from(hint: i64) -> Result<Self, Self::Error> {
        Self::new(hint)
    }
}

impl fmt::Display for LengthHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "unknown")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
