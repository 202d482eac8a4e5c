//! Shared parameter validation for payoff constructors.

use super::error::InstrumentError;

/// Validates a strike (finite, non-negative).
#[inline]
pub(crate) fn check_strike(strike: f64) -> Result<f64, InstrumentError> {
    if strike.is_finite() && strike >= 0.0 {
        Ok(strike)
    } else {
        Err(InstrumentError::InvalidStrike { strike })
    }
}

/// Validates a barrier level (finite, non-negative).
#[inline]
pub(crate) fn check_barrier(barrier: f64) -> Result<f64, InstrumentError> {
    if barrier.is_finite() && barrier >= 0.0 {
        Ok(barrier)
    } else {
        Err(InstrumentError::InvalidBarrier { barrier })
    }
}

/// Validates a payoff-function argument (finite, non-negative).
#[inline]
pub(crate) fn check_underlying(underlying: f64) -> Result<f64, InstrumentError> {
    if underlying.is_finite() && underlying >= 0.0 {
        Ok(underlying)
    } else {
        Err(InstrumentError::InvalidUnderlying { underlying })
    }
}
