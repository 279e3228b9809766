//! Typed entry points over the segdrain materializer.
//!
//! Every delegator returns a [`SharedBuffer`]: an owned buffer for a
//! non-empty producer, or the process-wide empty constant for its element
//! type. A fresh empty buffer is never allocated.
//!
//! - [`of`] / [`convert`]: materialize a producer as-is or through `TryFrom`.
//! - [`unboxed`] / [`from_boxed_slice`]: materialize `Option<T>` values,
//!   rejecting or substituting absent entries.
//! - [`MaterializeExt`]: the same as methods on any iterator, hinted from
//!   `size_hint`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boxed;
pub mod delegate;
pub mod ext;
pub mod shared;

pub use boxed::{from_boxed_slice, unboxed};
pub use delegate::{convert, from_slice, of, of_unhinted};
pub use ext::MaterializeExt;
pub use shared::{empty, share, SharedBuffer};
