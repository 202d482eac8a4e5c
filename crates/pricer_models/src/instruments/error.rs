//! Instrument error types.
//!
//! This module provides structured error handling for payoff
//! construction and payoff-function evaluation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike is negative or not finite
/// - `InvalidBarrier`: Barrier is negative or not finite
/// - `BarrierOrdering`: Barrier lies on the wrong side of the strike
/// - `InvalidDirection`: Call/put flag is neither +1 nor -1
/// - `InvalidUnderlying`: Payoff evaluated at a negative or non-finite value
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike (negative or not finite).
    #[error("Invalid strike: K = {strike} (must be a non-negative number)")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid barrier (negative or not finite).
    #[error("Invalid barrier: B = {barrier} (must be a non-negative number)")]
    InvalidBarrier {
        /// The invalid barrier value
        barrier: f64,
    },

    /// Barrier on the wrong side of the strike for the direction.
    #[error("Invalid barrier ordering: (B - K) * flag must be non-negative, got B = {barrier}, K = {strike}, flag = {flag}")]
    BarrierOrdering {
        /// Strike value
        strike: f64,
        /// Barrier value
        barrier: f64,
        /// Call/put flag
        flag: i32,
    },

    /// Call/put flag outside {+1, -1}.
    #[error("Invalid call/put flag: {flag} (must be 1 or -1)")]
    InvalidDirection {
        /// The rejected flag
        flag: i32,
    },

    /// Underlying value outside the payoff domain.
    #[error("Invalid underlying: S = {underlying} (must be a non-negative number)")]
    InvalidUnderlying {
        /// The rejected underlying value
        underlying: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::Validation(err.to_string())
    }
}
