//! Catalog and ingestion error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Structural catalog errors. Any of these ends the run.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file does not exist.
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {message}")]
    Io {
        /// Catalog path
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// Document is not well-formed XML.
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// Document has no root element.
    #[error("Catalog has no root element")]
    Empty,
}

/// Failure converting a single catalog element.
///
/// Contained per element: the element is skipped and ingestion continues.
///
/// # Examples
/// ```
/// use adapter_catalog::IngestionError;
///
/// let err = IngestionError::InvalidDirection { type_attribute: "DigitalStraddle".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Payoff type 'DigitalStraddle' must end with 'Call' or 'Put'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestionError {
    /// Required attribute absent.
    #[error("Missing attribute '{attribute}'")]
    MissingAttribute {
        /// Attribute name
        attribute: &'static str,
    },

    /// Required child element absent or empty.
    #[error("Missing element '{element}'")]
    MissingElement {
        /// Element name
        element: String,
    },

    /// Element text is not a number.
    #[error("Element '{element}' is not a number: '{value}'")]
    InvalidNumber {
        /// Element name
        element: String,
        /// Offending text
        value: String,
    },

    /// Type attribute lacks a `Call`/`Put` suffix.
    #[error("Payoff type '{type_attribute}' must end with 'Call' or 'Put'")]
    InvalidDirection {
        /// Raw type attribute
        type_attribute: String,
    },

    /// Payoff type absent from the pricing configuration.
    #[error("{payoff_type} cannot be priced")]
    UnpricedType {
        /// Payoff type name
        payoff_type: String,
    },

    /// Grid override block breaks the grid invariants.
    #[error("Invalid pricing settings: {0}")]
    InvalidSettings(String),

    /// Factory or validation failure.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
