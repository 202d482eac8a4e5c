//! Configuration error types.

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Pricing configuration is not valid JSON or has the wrong shape.
    #[error("Invalid pricing configuration: {0}")]
    JsonError(String),

    /// Processor settings are not valid TOML or have the wrong shape.
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// Log level name not recognised.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Exact backend name not recognised.
    #[error("Invalid exact backend: {0}. Must be one of: unavailable, closed-form")]
    InvalidBackend(String),

    /// A value parsed but breaks an invariant.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
