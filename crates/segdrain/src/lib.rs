//! segdrain: drain single-pass producers into exactly-sized buffers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all segdrain sub-crates. For most users, adding `segdrain` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use segdrain::prelude::*;
//!
//! // A producer of unknown length: the hint is only an estimate.
//! let producer = (0..50).filter(|x| x % 5 != 0);
//! let out = Materializer::default()
//!     .drain(producer, LengthHint::exact(16))
//!     .unwrap();
//! assert_eq!(out.len(), 40);
//! assert_eq!(out.stats().path, MaterializePath::Merged);
//!
//! // An exact hint fills one segment and returns it without copying.
//! let out = Materializer::default()
//!     .drain(vec!["a", "b", "c"], LengthHint::exact(3))
//!     .unwrap();
//! assert_eq!(out.stats().path, MaterializePath::FastPath);
//!
//! // Typed delegators share one empty constant per element type.
//! let empty = of(Some(Vec::<u16>::new()), 0).unwrap();
//! assert!(matches!(empty, SharedBuffer::Borrowed(_)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `segdrain-core` | `MaterializeError`, `ErrorKind`, `LengthHint` |
//! | [`buffer`] | `segdrain-buffer` | `Materializer`, segments, stats, `materialize` |
//! | [`typed`] | `segdrain-typed` | Shared empty buffers, typed and boxed delegators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error and hint types (`segdrain-core`).
pub use segdrain_core as types;

/// The materializer and its segment machinery (`segdrain-buffer`).
///
/// Most users only need [`buffer::Materializer`] and
/// [`buffer::materialize`]; both are also in the [`prelude`].
pub use segdrain_buffer as buffer;

/// Typed delegators (`segdrain-typed`).
///
/// [`typed::of`], [`typed::convert`] and [`typed::unboxed`] return a
/// [`typed::SharedBuffer`] that borrows the shared empty constant when
/// the producer is empty.
pub use segdrain_typed as typed;

/// Common imports for typical segdrain usage.
///
/// ```rust
/// use segdrain::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use segdrain_core::{ErrorKind, LengthHint, MaterializeError};

    // Materializer
    pub use segdrain_buffer::{
        materialize, MaterializePath, MaterializeStats, Materialized, Materializer,
        MaterializerConfig,
    };

    // Typed delegators
    pub use segdrain_typed::{
        convert, empty, from_boxed_slice, from_slice, of, of_unhinted, unboxed, MaterializeExt,
        SharedBuffer,
    };
}
