//! Delegators for boxed (`Option<T>`) producers.
//!
//! An absent entry is rejected at the point it is read, with the index at
//! which it was produced, unless the caller supplies a substitute value.

use segdrain_buffer::Materializer;
use segdrain_core::{LengthHint, MaterializeError};

use crate::shared::{share, SharedBuffer};

/// Materialize a producer of optional values.
///
/// `None` entries are replaced by a clone of `substitute` when one is
/// given; otherwise the call fails.
///
/// # Errors
///
/// - [`MaterializeError::MissingProducer`] / [`MaterializeError::NegativeHint`]
///   before anything is pulled.
/// - [`MaterializeError::MissingValue`] for the first absent entry when
///   `substitute` is `None`.
pub fn unboxed<T, I>(
    producer: Option<I>,
    hint: i64,
    substitute: Option<T>,
) -> Result<SharedBuffer<T>, MaterializeError>
where
    T: Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let producer = producer.ok_or(MaterializeError::MissingProducer)?;
    let hint = LengthHint::new(hint)?;
    unbox_with(producer, hint, substitute)
}

/// Materialize a slice of optional values.
///
/// The slice length is an exact hint, so a successful call allocates a
/// single buffer.
///
/// # Errors
///
/// [`MaterializeError::MissingValue`] as for [`unboxed`].
pub fn from_boxed_slice<T: Clone>(
    values: &[Option<T>],
    substitute: Option<T>,
) -> Result<SharedBuffer<T>, MaterializeError> {
    unbox_with(values.iter().cloned(), LengthHint::exact(values.len()), substitute)
}

fn unbox_with<T, I>(
    producer: I,
    hint: LengthHint,
    substitute: Option<T>,
) -> Result<SharedBuffer<T>, MaterializeError>
where
    T: Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let items = producer
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Some(value) => Ok(value),
            None => substitute
                .clone()
                .ok_or(MaterializeError::MissingValue { index }),
        });
    let materialized = Materializer::default().try_drain(items, hint)?;
    Ok(share(materialized.into_buffer()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn all_present_values_pass_through() {
        let out = unboxed(Some(vec![Some(1i64), Some(2), Some(3)]), 0, None).unwrap();
        assert_eq!(&*out, &[1, 2, 3]);
    }

    #[test]
    fn absent_value_without_substitute_fails_at_its_index() {
        let err = unboxed(Some(vec![Some(1u16), None, Some(3)]), 3, None).unwrap_err();
        assert_eq!(err, MaterializeError::MissingValue { index: 1 });
    }

    #[test]
    fn absent_value_takes_substitute() {
        let out = unboxed(Some(vec![None, Some(2u16), None]), 0, Some(0)).unwrap();
        assert_eq!(&*out, &[0, 2, 0]);
    }

    #[test]
    fn empty_boxed_producer_is_shared_constant() {
        let out = unboxed(Some(Vec::<Option<u8>>::new()), 0, Some(9)).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn argument_errors_checked_first() {
        assert_eq!(
            unboxed::<u8, Vec<Option<u8>>>(None, 0, None).unwrap_err(),
            MaterializeError::MissingProducer
        );
        assert_eq!(
            unboxed(Some(vec![None::<u8>]), -2, None).unwrap_err(),
            MaterializeError::NegativeHint { hint: -2 }
        );
    }

    #[test]
    fn boxed_slice_uses_its_length_as_hint() {
        let values = [Some("a".to_string()), None, Some("c".to_string())];
        let out = from_boxed_slice(&values, Some(String::new())).unwrap();
        assert_eq!(&*out, &["a".to_string(), String::new(), "c".to_string()]);
        assert!(from_boxed_slice(&values, None).is_err());
    }
}
