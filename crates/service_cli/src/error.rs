//! CLI error types

use infra_config::ConfigError;
use thiserror::Error;

/// Errors that end the command before or outside a processing run
#[derive(Debug, Error)]
pub enum CliError {
    /// Run log or stdout I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Report serialisation failure
    #[error("Failed to serialise report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
