//! Configuration error types

use thiserror::Error;

use crate::features::resource_state::ValidationError;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in scenario file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported scenario version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u64, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: classic-ring, multi-instance-safe")]
    UnknownPreset(String),

    /// Unknown resource model name
    #[error("Unknown resource model '{0}'. Valid models: single, multiple")]
    UnknownModel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Tables disagree with each other
    #[error("Invalid scenario: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration result type
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
