//! Delegators for producers whose items are, or convert to, the element type.

use std::fmt;

use segdrain_buffer::{materialize, Materializer};
use segdrain_core::{LengthHint, MaterializeError};

use crate::shared::{empty, share, SharedBuffer};

/// Materialize `producer` with a length `hint` (0 = unknown).
///
/// # Errors
///
/// As [`materialize`]: absent producer, negative hint, or allocation failure.
pub fn of<T, I>(producer: Option<I>, hint: i64) -> Result<SharedBuffer<T>, MaterializeError>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let producer = producer.ok_or(MaterializeError::MissingProducer)?;
    let hint = LengthHint::new(hint)?;
    let materialized = Materializer::default().drain(producer, hint)?;
    Ok(share(materialized.into_buffer()))
}

/// Materialize `producer` without a length estimate.
///
/// # Errors
///
/// As [`of`].
pub fn of_unhinted<T, I>(producer: Option<I>) -> Result<SharedBuffer<T>, MaterializeError>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    of(producer, 0)
}

/// Materialize `producer`, converting each item to `T` as it is written.
///
/// # Errors
///
/// As [`materialize`], including [`MaterializeError::TypeMismatch`] for
/// the first item `T` rejects.
pub fn convert<T, I>(producer: Option<I>, hint: i64) -> Result<SharedBuffer<T>, MaterializeError>
where
    T: Clone + TryFrom<I::Item>,
    I: IntoIterator,
    <T as TryFrom<I::Item>>::Error: fmt::Display,
{
    materialize::<T, I>(producer, hint).map(share)
}

/// Copy a slice into a buffer, sharing the empty constant for an empty slice.
///
/// Copies directly with `to_vec`; the materializer is not involved, so no
/// `MaterializeStats` are produced.
pub fn from_slice<T: Clone>(values: &[T]) -> SharedBuffer<T> {
    if values.is_empty() {
        return SharedBuffer::Borrowed(empty());
    }
    SharedBuffer::Owned(values.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn of_empty_is_shared_constant() {
        let out = of(Some(Vec::<i16>::new()), 8).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn of_preserves_order() {
        let out = of(Some(vec!['x', 'y', 'z']), 1).unwrap();
        assert_eq!(&*out, &['x', 'y', 'z']);
    }

    #[test]
    fn of_unhinted_matches_hinted() {
        let values: Vec<f64> = (0..40).map(f64::from).collect();
        let a = of_unhinted(Some(values.clone())).unwrap();
        let b = of(Some(values.clone()), 40).unwrap();
        assert_eq!(a, b);
        assert_eq!(&*a, values.as_slice());
    }

    #[test]
    fn of_rejects_bad_arguments() {
        assert_eq!(
            of::<bool, Vec<bool>>(None, 0).unwrap_err(),
            MaterializeError::MissingProducer
        );
        assert_eq!(
            of(Some(vec![true]), -1).unwrap_err(),
            MaterializeError::NegativeHint { hint: -1 }
        );
    }

    #[test]
    fn convert_widens_bytes_to_ints() {
        let out = convert::<i32, _>(Some([1u8, 2, 255]), 3).unwrap();
        assert_eq!(&*out, &[1, 2, 255]);
    }

    #[test]
    fn convert_rejects_out_of_range() {
        let err = convert::<u8, _>(Some([1i32, 256]), 0).unwrap_err();
        assert!(matches!(err, MaterializeError::TypeMismatch { index: 1, .. }));
    }

    #[test]
    fn from_slice_shares_empty() {
        assert!(matches!(from_slice::<u32>(&[]), Cow::Borrowed(_)));
        assert_eq!(&*from_slice(&[3u32, 4]), &[3, 4]);
    }

    mod proptests {
        use super::*;
        use crate::boxed::unboxed;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unboxed_all_present_equals_of(
                values in proptest::collection::vec(any::<i32>(), 0..200),
                hint in 0i64..250,
            ) {
                let boxed: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
                let direct = of(Some(values.clone()), hint).unwrap();
                let via_boxes = unboxed(Some(boxed), hint, None).unwrap();
                prop_assert_eq!(&direct, &via_boxes);
                prop_assert_eq!(&*direct, values.as_slice());
            }

            #[test]
            fn convert_widening_roundtrips(
                values in proptest::collection::vec(any::<i32>(), 0..200),
                hint in 0i64..250,
            ) {
                let wide = convert::<i64, _>(Some(values.clone()), hint).unwrap();
                let narrow = convert::<i32, _>(Some(wide.iter().copied()), hint).unwrap();
                prop_assert_eq!(&*narrow, values.as_slice());
            }
        }
    }
}
