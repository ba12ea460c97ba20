//! Error types for the payoff simulator.
//!
//! [`ConfigError`] covers configuration validation and converts into
//! [`PricingError`] at the engine boundary.

use std::fmt;

use pricer_core::types::PricingError;

use super::config::MAX_PATHS;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Batch size of zero.
    InvalidBatchSize(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, {}]",
                    count, MAX_PATHS
                )
            }
            Self::InvalidBatchSize(size) => {
                write!(f, "Invalid batch size {}: must be at least 1", size)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(0) => PricingError::InvalidSampleCount(0),
            ConfigError::InvalidParameter { name: "n_paths", .. } => {
                PricingError::InvalidSampleCount(0)
            }
            other => PricingError::InvalidSimulationConfig(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidBatchSize(0);
        assert!(err.to_string().contains("Invalid batch size 0"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_paths"));
    }

    #[test]
    fn test_zero_paths_convert_to_sample_count_error() {
        let err: PricingError = ConfigError::InvalidPathCount(0).into();
        assert_eq!(err, PricingError::InvalidSampleCount(0));

        let err: PricingError = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        }
        .into();
        assert_eq!(err, PricingError::InvalidSampleCount(0));
    }

    #[test]
    fn test_batch_size_and_path_cap_keep_their_message() {
        let err: PricingError = ConfigError::InvalidBatchSize(0).into();
        match err {
            PricingError::InvalidSimulationConfig(msg) => {
                assert!(msg.contains("Invalid batch size 0"), "{}", msg)
            }
            other => panic!("expected InvalidSimulationConfig, got {:?}", other),
        }

        let err: PricingError = ConfigError::InvalidPathCount(20_000_000).into();
        match err {
            PricingError::InvalidSimulationConfig(msg) => {
                assert!(msg.contains("Invalid path count 20000000"), "{}", msg)
            }
            other => panic!("expected InvalidSimulationConfig, got {:?}", other),
        }
    }
}
