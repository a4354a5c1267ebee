//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the router's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `TRIEROUTER_SLOW_MATCH_US`
//!
//! Lookup duration, in microseconds, above which a `warn` event is emitted for
//! the request. Lookups are O(depth of path), so anything slow usually means a
//! pathological regex segment.
//!
//! Default: `1000` (1 ms)
//!
//! ## Usage
//!
//! ```rust
//! use trierouter::runtime_config::RuntimeConfig;
//! use trierouter::Router;
//!
//! let config = RuntimeConfig::from_env();
//! let router: Router<&str> = Router::with_config(&config);
//! assert!(router.is_empty());
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Lookups slower than this are logged at `warn` (default: 1 ms)
    pub slow_match_threshold: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slow_match_us = lookup("TRIEROUTER_SLOW_MATCH_US")
            .and_then(|val| val.trim().parse().ok())
            .unwrap_or(DEFAULT_SLOW_MATCH_US);
        RuntimeConfig {
            slow_match_threshold: Duration::from_micros(slow_match_us),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.slow_match_threshold, Duration::from_millis(1));
    }

    #[test]
    fn test_slow_match_override() {
        let config = RuntimeConfig::from_lookup(|key| {
            (key == "TRIEROUTER_SLOW_MATCH_US").then(|| "250".to_string())
        });
        assert_eq!(config.slow_match_threshold, Duration::from_micros(250));
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = RuntimeConfig::from_lookup(|_| Some("fast".to_string()));
        assert_eq!(config, RuntimeConfig::default());
    }
}
