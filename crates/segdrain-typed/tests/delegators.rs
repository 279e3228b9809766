//! Integration test: typed delegators across element types.

use std::borrow::Cow;

use segdrain_test_utils::fixtures::{ints, letters};
use segdrain_test_utils::CountingProducer;
use segdrain_typed::{convert, from_boxed_slice, of, unboxed, MaterializeExt};

fn assert_shared_empty<T: Clone + std::fmt::Debug>(buffer: Cow<'static, [T]>) {
    assert!(
        matches!(buffer, Cow::Borrowed(s) if s.is_empty()),
        "expected shared empty buffer, got {buffer:?}"
    );
}

#[test]
fn every_element_type_shares_its_empty_constant() {
    assert_shared_empty(of(Some(Vec::<bool>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<u8>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<i16>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<char>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<i32>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<i64>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<f32>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<f64>::new()), 0).unwrap());
    assert_shared_empty(of(Some(Vec::<String>::new()), 0).unwrap());
}

#[test]
fn ints_through_delegator_for_every_length_and_hint() {
    for n in 0..100 {
        let expected = ints(n);
        for hint in 0..100 {
            let (producer, counter) = CountingProducer::new(expected.clone());
            let out = of(Some(producer), hint).unwrap();
            assert_eq!(&*out, expected.as_slice(), "n={n} hint={hint}");
            assert_eq!(counter.pulls(), n);
        }
    }
}

#[test]
fn strings_through_delegator_for_every_length_and_hint() {
    for n in 0..100 {
        let expected = letters(n);
        for hint in 0..100 {
            let out = of(Some(expected.iter().cloned()), hint).unwrap();
            assert_eq!(&*out, expected.as_slice(), "n={n} hint={hint}");
        }
    }
}

#[test]
fn unboxed_matches_direct_path() {
    let values = ints(64);
    let boxed: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
    let direct = of(Some(values.clone()), 0).unwrap();
    let via_boxes = unboxed(Some(boxed.clone()), 0, None).unwrap();
    assert_eq!(direct, via_boxes);
    assert_eq!(from_boxed_slice(&boxed, None).unwrap(), direct);
}

#[test]
fn unboxed_missing_value_stops_pulling() {
    let boxed = vec![Some(1.0f64), Some(2.0), None, Some(4.0)];
    let (producer, counter) = CountingProducer::new(boxed);
    let err = unboxed(Some(producer), 0, None).unwrap_err();
    assert_eq!(err, segdrain_core::MaterializeError::MissingValue { index: 2 });
    assert_eq!(counter.pulls(), 3);
}

#[test]
fn convert_chars_to_code_points() {
    let out = convert::<u32, _>(Some("héllo".chars()), 0).unwrap();
    assert_eq!(&*out, &[104, 233, 108, 108, 111]);
}

#[test]
fn extension_trait_on_counting_producer() {
    let (producer, counter) = CountingProducer::new(ints(33));
    let out = producer.materialize().unwrap();
    assert_eq!(out.len(), 33);
    assert_eq!(counter.pulls(), 33);
}
