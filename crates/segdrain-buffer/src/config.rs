//! Materializer configuration parameters.

use crate::error::ConfigError;

/// Configuration for a [`Materializer`](crate::Materializer).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterializerConfig {
    /// Capacity of the first segment when the caller gives no length hint.
    ///
    /// Default: 16. Must be at least 1.
    pub default_capacity: usize,
}

impl MaterializerConfig {
    /// Default first-segment capacity for unhinted producers.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Override the capacity used when no hint is given.
    pub fn with_default_capacity(mut self, default_capacity: usize) -> Self {
        self.default_capacity = default_capacity;
        self
    }

    /// Check that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDefaultCapacity`] if `default_capacity == 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_capacity == 0 {
            return Err(ConfigError::ZeroDefaultCapacity);
        }
        Ok(())
    }
}

impl Default for MaterializerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_16() {
        let config = MaterializerConfig::default();
        assert_eq!(config.default_capacity, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_default_capacity_rejected() {
        let config = MaterializerConfig::new().with_default_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDefaultCapacity));
    }
}
