//! # Adapter Catalog
//!
//! Reads a deal catalog (XML) and turns it into a priceable
//! [`Portfolio`](pricer_models::portfolio::Portfolio).
//!
//! - [`document`]: well-formedness checks and a small element tree
//! - [`ingest`]: per-element conversion into deals and grid overrides, with
//!   failures contained per element
//!
//! ## Example
//!
//! ```rust
//! use adapter_catalog::{parse_document, PortfolioIngestor};
//! use infra_config::PricingConfiguration;
//! use pricer_core::math::GridSettings;
//!
//! let xml = r#"<Portfolio>
//!   <Payoff type="PlainVanillaCall">
//!     <strike>10</strike>
//!     <dealID>D-001</dealID>
//!     <model distribution="Uniform"><location>10</location><scale>3</scale></model>
//!   </Payoff>
//!   <Payoff type="PlainVanillaStraddle"/>
//! </Portfolio>"#;
//!
//! let config = PricingConfiguration::default();
//! let ingestor = PortfolioIngestor::new(&config);
//! let report = ingestor.ingest(&parse_document(xml).unwrap(), GridSettings::default());
//!
//! assert_eq!(report.portfolio.len(), 1);
//! assert_eq!(report.failures().count(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod document;
pub mod error;
pub mod ingest;

pub use document::{parse_document, read_catalog, Element};
pub use error::{CatalogError, IngestionError};
pub use ingest::{DealSummary, ElementFailure, IngestionEvent, IngestionReport, PortfolioIngestor};
