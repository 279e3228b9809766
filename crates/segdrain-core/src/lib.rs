//! Core types for the segdrain workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by the materializer and the typed
//! delegators, and the [`LengthHint`] that callers pass to estimate how
//! many elements a producer will yield.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hint;

pub use error::{ErrorKind, MaterializeError};
pub use hint::LengthHint;
