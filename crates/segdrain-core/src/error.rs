//! Error types for materialization.
//!
//! Every error is fatal to the call that raised it. The taxonomy separates
//! argument errors (detected before any element is pulled) from errors
//! raised while writing a pulled element.

use std::error::Error;
use std::fmt;

/// Coarse classification of a [`MaterializeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call itself was malformed: absent producer or negative hint.
    InvalidArgument,
    /// A pulled element could not be stored as the declared element type.
    TypeMismatch,
    /// The allocator refused a segment or result buffer.
    Allocation,
}

/// Errors from draining a producer into a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaterializeError {
    /// No producer was supplied.
    MissingProducer,
    /// The length hint was negative.
    NegativeHint {
        /// The rejected hint.
        hint: i64,
    },
    /// An element could not be converted to the declared element type.
    TypeMismatch {
        /// Zero-based production index of the offending element.
        index: usize,
        /// Name of the declared element type.
        expected: &'static str,
        /// Conversion failure reported by the element type.
        reason: String,
    },
    /// A boxed element was absent and no substitute was supplied.
    MissingValue {
        /// Zero-based production index of the absent element.
        index: usize,
    },
    /// Reserving storage for `requested` elements failed.
    AllocationFailed {
        /// Number of elements that could not be reserved.
        requested: usize,
    },
}

impl MaterializeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingProducer | Self::NegativeHint { .. } => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } | Self::MissingValue { .. } => ErrorKind::TypeMismatch,
            Self::AllocationFailed { .. } => ErrorKind::Allocation,
        }
    }

    /// Build a [`TypeMismatch`](Self::TypeMismatch) for element type `T`.
    pub fn type_mismatch<T>(index: usize, reason: impl fmt::Display) -> Self {
        Self::TypeMismatch {
            index,
            expected: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProducer => write!(f, "producer required"),
            Self::NegativeHint { hint } => {
                write!(f, "hint must be non-negative, got {hint}")
            }
            Self::TypeMismatch {
                index,
                expected,
                reason,
            } => {
                write!(
                    f,
                    "element {index} is not assignable to {expected}: {reason}"
                )
            }
            Self::MissingValue { index } => {
                write!(f, "element {index} is missing and no substitute was given")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to reserve storage for {requested} elements")
            }
        }
    }
}

impl Error for MaterializeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_are_invalid_argument() {
        assert_eq!(
            MaterializeError::MissingProducer.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            MaterializeError::NegativeHint { hint: -1 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn missing_value_counts_as_type_mismatch() {
        let err = MaterializeError::MissingValue { index: 3 };
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.to_string(),
            "element 3 is missing and no substitute was given"
        );
    }

    #[test]
    fn type_mismatch_names_the_declared_type() {
        let err = MaterializeError::type_mismatch::<u8>(7, "out of range");
        match &err {
            MaterializeError::TypeMismatch {
                index,
                expected,
                reason,
            } => {
                assert_eq!(*index, 7);
                assert_eq!(*expected, "u8");
                assert_eq!(reason, "out of range");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            MaterializeError::MissingProducer.to_string(),
            "producer required"
        );
        assert_eq!(
            MaterializeError::NegativeHint { hint: -4 }.to_string(),
            "hint must be non-negative, got -4"
        );
        assert_eq!(
            MaterializeError::AllocationFailed { requested: 9 }.to_string(),
            "failed to reserve storage for 9 elements"
        );
    }
}
