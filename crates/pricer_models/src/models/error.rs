//! Distribution model error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Distribution-model errors.
///
/// Raised when a model is constructed with invalid location/scale values or
/// when its density is evaluated outside the supported domain.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidScale { scale: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid scale: 0 (must be a positive number)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Location is non-positive or not finite.
    #[error("Invalid location: {location} (must be a positive number)")]
    InvalidLocation {
        /// The rejected location
        location: f64,
    },

    /// Scale is non-positive or not finite.
    #[error("Invalid scale: {scale} (must be a positive number)")]
    InvalidScale {
        /// The rejected scale
        scale: f64,
    },

    /// Density argument is negative or not finite.
    #[error("Invalid density argument: x = {x} (must be a non-negative number)")]
    InvalidArgument {
        /// The rejected argument
        x: f64,
    },

    /// Density is singular at the requested point.
    #[error("{model} density is not finite at x = {x}")]
    NonFiniteDensity {
        /// Model name
        model: &'static str,
        /// Evaluation point
        x: f64,
    },

    /// The underlying distribution rejected the parameters.
    #[error("{model} construction failed: {message}")]
    Construction {
        /// Model name
        model: &'static str,
        /// Message from the distribution library
        message: String,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::Validation(err.to_string())
    }
}

/// Validates a location/scale pair shared by all models.
pub(crate) fn check_location_scale(location: f64, scale: f64) -> Result<(), ModelError> {
    if !location.is_finite() || location <= 0.0 {
        return Err(ModelError::InvalidLocation { location });
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ModelError::InvalidScale { scale });
    }
    Ok(())
}

/// Validates a density argument.
pub(crate) fn check_argument(x: f64) -> Result<(), ModelError> {
    if !x.is_finite() || x < 0.0 {
        return Err(ModelError::InvalidArgument { x });
    }
    Ok(())
}
