//! # Engine Configuration
//!
//! Startup configuration, loaded once before the heap exists. Nothing here
//! is consulted again after initialization - the engine does not reconfigure
//! itself at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::memory::SECTOR_OVERHEAD;

/// One binary kilobyte, for readable capacity requests.
pub const KILOBYTE: usize = 1024;

/// One binary megabyte.
pub const MEGABYTE: usize = 1024 * KILOBYTE;

/// One binary gigabyte.
pub const GIGABYTE: usize = 1024 * MEGABYTE;

/// Errors that can occur while loading the engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML source could not be parsed.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),

    /// The configured heap capacity cannot even hold the heap's bootstrap
    /// bookkeeping.
    #[error("heap capacity {0} is smaller than the heap's own bookkeeping")]
    CapacityTooSmall(usize),
}

/// Engine-wide startup configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Total bytes to request for the engine heap at startup.
    pub heap_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            heap_capacity: MEGABYTE,
        }
    }
}

impl CoreConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if the text is not valid TOML;
    /// [`ConfigError::CapacityTooSmall`] if the configured capacity cannot
    /// hold the heap's bootstrap header.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.heap_capacity <= SECTOR_OVERHEAD {
            return Err(ConfigError::CapacityTooSmall(config.heap_capacity));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_one_megabyte() {
        let config = CoreConfig::default();
        assert_eq!(config.heap_capacity, 1024 * 1024);
    }

    #[test]
    fn test_parse_from_toml() {
        let config = CoreConfig::from_toml_str("heap_capacity = 4096").unwrap();
        assert_eq!(config.heap_capacity, 4096);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = CoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_rejects_unparseable_toml() {
        let err = CoreConfig::from_toml_str("heap_capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_capacity_below_bookkeeping() {
        let err = CoreConfig::from_toml_str("heap_capacity = 16").unwrap_err();
        assert!(matches!(err, ConfigError::CapacityTooSmall(16)));
    }
}
