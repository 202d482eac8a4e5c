//! Processor settings.
//!
//! Handles loading settings from a TOML file and merging command-line
//! overrides. Every field has a default, so an empty file is valid.
//!
//! ```toml
//! pricing_configuration = "pricing_configuration.json"
//! log_file = "log.txt"
//! exact_backend = "unavailable"
//! parallel = false
//! log_level = "info"
//!
//! [grid]
//! x_min = 0.01
//! x_step = 0.5
//! x_max = 100.01
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::math::GridSettings;
use pricer_pricing::{ClosedFormBackend, ExactBackend, UnavailableBackend};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Default pricing-configuration file name.
pub const DEFAULT_PRICING_CONFIGURATION: &str = "pricing_configuration.json";

/// Default run-log file name.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Log levels for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Diagnostics, including grid fallbacks
    Debug,
    /// Run milestones
    #[default]
    Info,
    /// Contained failures
    Warn,
    /// Run-ending failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Exact-evaluation backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExactBackendKind {
    /// No exact backend; exact requests are priced on the grid
    #[default]
    Unavailable,
    /// Closed-form digital prices from the model CDF
    ClosedForm,
}

impl FromStr for ExactBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unavailable" | "none" => Ok(ExactBackendKind::Unavailable),
            "closed-form" | "closed_form" => Ok(ExactBackendKind::ClosedForm),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

impl ExactBackendKind {
    /// Instantiates the backend.
    pub fn backend(self) -> Box<dyn ExactBackend> {
        match self {
            ExactBackendKind::Unavailable => Box::new(UnavailableBackend),
            ExactBackendKind::ClosedForm => Box::new(ClosedFormBackend),
        }
    }
}

/// Processor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorSettings {
    /// Pricing configuration (JSON) path
    pub pricing_configuration: PathBuf,
    /// Run log path
    pub log_file: PathBuf,
    /// Exact backend
    pub exact_backend: ExactBackendKind,
    /// Price deals on the rayon pool
    pub parallel: bool,
    /// Tracing level
    pub log_level: LogLevel,
    /// Default grid, replaced by a catalog override block
    pub grid: GridSettings,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            pricing_configuration: PathBuf::from(DEFAULT_PRICING_CONFIGURATION),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            exact_backend: ExactBackendKind::Unavailable,
            parallel: false,
            log_level: LogLevel::Info,
            grid: GridSettings::default(),
        }
    }
}

impl ProcessorSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: ProcessorSettings =
            toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid
            .validate()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("log_file must not be empty".to_string()));
        }
        if self.pricing_configuration.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "pricing_configuration must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(path) = &cli.pricing_configuration {
            self.pricing_configuration = path.clone();
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if let Some(backend) = &cli.exact_backend {
            self.exact_backend = ExactBackendKind::from_str(backend)?;
        }
        if cli.parallel {
            self.parallel = true;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Settings file path
    pub config_file: Option<PathBuf>,
    /// Pricing configuration path override
    pub pricing_configuration: Option<PathBuf>,
    /// Run log path override
    pub log_file: Option<PathBuf>,
    /// Exact backend override
    pub exact_backend: Option<String>,
    /// Enable parallel pricing
    pub parallel: bool,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build settings from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Settings file (a missing file falls back to defaults)
/// 3. Default values
pub fn build_settings(cli: &CliOverrides) -> Result<ProcessorSettings, ConfigError> {
    let mut settings = match &cli.config_file {
        Some(path) if path.exists() => ProcessorSettings::from_file(path)?,
        Some(path) => {
            warn!(path = %path.display(), "Settings file not found, using defaults");
            ProcessorSettings::default()
        }
        None => ProcessorSettings::default(),
    };

    settings.merge_with_cli(cli)?;
    settings.validate()?;

    Ok(settings)
}
