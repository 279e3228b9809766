//! Shared empty buffers.

use std::borrow::Cow;

/// A materialized buffer: borrowed from a shared constant when empty,
/// owned otherwise.
pub type SharedBuffer<T> = Cow<'static, [T]>;

/// The shared empty buffer for element type `T`.
///
/// Zero-length, immutable, and never allocated, so it can be handed to
/// any number of callers.
pub fn empty<T>() -> &'static [T] {
    &[]
}

/// Wrap a materializer result, substituting [`empty`] for `None`.
pub fn share<T: Clone>(buffer: Option<Box<[T]>>) -> SharedBuffer<T> {
    match buffer {
        Some(buffer) => Cow::Owned(buffer.into_vec()),
        None => Cow::Borrowed(empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_becomes_borrowed_empty() {
        let shared = share::<u64>(None);
        assert!(matches!(shared, Cow::Borrowed(s) if s.is_empty()));
    }

    #[test]
    fn some_stays_owned() {
        let shared = share(Some(vec![1.5f32, 2.5].into_boxed_slice()));
        assert!(matches!(shared, Cow::Owned(_)));
        assert_eq!(&*shared, &[1.5, 2.5]);
    }

    #[test]
    fn empty_works_for_any_element_type() {
        assert!(empty::<bool>().is_empty());
        assert!(empty::<String>().is_empty());
        assert!(empty::<Vec<u8>>().is_empty());
    }
}
