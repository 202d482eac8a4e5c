//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from payoff/model construction, factory lookup
//!   and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure raised by the pricing layers (payoff and model validation,
/// factory resolution, method dispatch) ends up as one of these variants so
/// callers can decide containment policy from the kind alone.
///
/// # Variants
/// - `Validation`: Invalid parameter value at construction or evaluation
/// - `UnknownType`: Payoff type name not present in the registry
/// - `UnknownModel`: Distribution name not present in the registry
/// - `ArgumentMismatch`: Supplied parameter set differs from the required one
/// - `UnknownMethod`: Pricing method name is not recognised
/// - `MissingMethod`: No pricing method configured for a payoff/model pair
/// - `AlreadyPriced`: A deal was priced twice
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::Validation("strike must be non-negative".to_string());
/// assert_eq!(format!("{}", err), "Validation error: strike must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid parameter value or argument.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payoff type not registered.
    #[error("Unknown payoff type: {0}")]
    UnknownType(String),

    /// Distribution model not registered.
    #[error("Unknown distribution model: {0}")]
    UnknownModel(String),

    /// Parameter names do not match the variant's required set.
    #[error("Argument mismatch for {payoff}: expected {expected:?}, got {supplied:?}")]
    ArgumentMismatch {
        /// Payoff type being constructed
        payoff: String,
        /// Parameter names the variant requires
        expected: Vec<String>,
        /// Parameter names actually supplied
        supplied: Vec<String>,
    },

    /// Pricing method name not recognised.
    #[error("Unknown pricing method: {0}")]
    UnknownMethod(String),

    /// No method configured for the payoff type / model combination.
    #[error("No pricing method configured for {payoff_type} under {model}")]
    MissingMethod {
        /// Payoff type name
        payoff_type: String,
        /// Distribution model name
        model: String,
    },

    /// Deal already carries a price.
    #[error("Deal {0} has already been priced")]
    AlreadyPriced(String),
}

impl PricingError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        PricingError::Validation(message.into())
    }

    /// Returns whether this error stems from parameter validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, PricingError::Validation(_))
    }
}
