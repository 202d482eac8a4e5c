//! Portfolio processor service.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! orchestrates the other layers: configuration (`infra_config`), catalog
//! ingestion (`adapter_catalog`) and pricing (`pricer_pricing`).
//!
//! - [`processor`]: one processing run over a catalog
//! - [`run_log`]: the plain-text run log
//! - [`report`]: stdout summaries (table or JSON)

pub mod error;
pub mod processor;
pub mod report;
pub mod run_log;

pub use error::{CliError, Result};
pub use processor::{PortfolioProcessor, RunOutcome, RunSummary};
pub use report::OutputFormat;
pub use run_log::RunLog;
