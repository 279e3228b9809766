//! Materializer configuration errors.

use std::error::Error;
use std::fmt;

/// Errors from validating a [`MaterializerConfig`](crate::MaterializerConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The default first-segment capacity was zero; the first pulled
    /// element would have nowhere to go.
    ZeroDefaultCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDefaultCapacity => write!(f, "default capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
