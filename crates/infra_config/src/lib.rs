//! # Infra Config
//!
//! Configuration for the portfolio processor:
//!
//! - [`pricing`]: the pricing configuration (payoff type → required
//!   parameters and per-distribution pricing method), loaded from JSON
//! - [`settings`]: processor settings (file locations, grid defaults, exact
//!   backend, parallelism, log level), loaded from TOML and merged with
//!   command-line overrides
//!
//! ## Example
//!
//! ```rust
//! use infra_config::PricingConfiguration;
//!
//! let config = PricingConfiguration::default();
//! assert_eq!(config.method_for("Digital", "Gamma"), Some("exact_eval"));
//! assert_eq!(config.required_parameters("Barrier"), Some(vec!["barrier", "strike"]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod pricing;
pub mod settings;

pub use error::ConfigError;
pub use pricing::{PayoffEntry, PricingConfiguration};
pub use settings::{build_settings, CliOverrides, ExactBackendKind, LogLevel, ProcessorSettings};
