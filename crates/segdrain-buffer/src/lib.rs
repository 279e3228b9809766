//! Segment-chain materialization of single-pass producers.
//!
//! Drains an iterator of unknown length into one exactly-sized
//! `Box<[T]>`, for any element type, while moving each element at most
//! twice: once into a segment, and once into the merged result.
//!
//! # Architecture
//!
//! ```text
//! Materializer (config: default first-segment capacity)
//! ├── Segment        (current, capacity = hint or default, then = total written)
//! ├── SegmentChain   (retired full segments, SmallVec-backed stack)
//! └── merge
//!     ├── fast path: single full segment → returned as-is, zero copies
//!     └── BackFill   (uninitialised result, filled tail-first from the chain)
//! ```
//!
//! # Growth
//!
//! When the current segment is full and the producer yields another
//! element, the segment is retired and replaced by one whose capacity
//! equals everything written so far. Capacities therefore at least double
//! after the first retirement, which bounds both the number of segments
//! (logarithmic in the element count) and the merge copies (one per
//! element).
//!
//! # Safety
//!
//! All `unsafe` code lives in `raw.rs`: the merge writes into
//! `MaybeUninit` slots and asserts every slot was written before the
//! buffer is exposed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod materialize;
mod raw;
pub mod segment;
pub mod stats;

// Public re-exports for the primary API surface.
pub use config::MaterializerConfig;
pub use error::ConfigError;
pub use materialize::{materialize, Materialized, Materializer};
pub use segdrain_core::{ErrorKind, LengthHint, MaterializeError};
pub use stats::{MaterializePath, MaterializeStats};
