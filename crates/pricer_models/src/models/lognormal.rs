//! Log-normal distribution model.
//!
//! Log-mean = location, log-standard-deviation = scale. Arguments close to
//! zero are clamped to a small floor before evaluation.

use statrs::distribution::{Continuous, ContinuousCDF, LogNormal};

use super::error::{check_argument, check_location_scale, ModelError};

/// Floor applied to density arguments near zero.
pub const LOGNORMAL_X_FLOOR: f64 = 1.0e-5;

/// Distance from the floor within which arguments are clamped.
pub const LOGNORMAL_X_TOLERANCE: f64 = 1.0e-5;

/// Log-normal density over the terminal value of the underlying.
///
/// # Examples
/// ```
/// use pricer_models::models::LogNormalModel;
///
/// let model = LogNormalModel::new(1.0, 0.5).unwrap();
/// // density at zero is evaluated at the floor instead of diverging
/// assert!(model.density(0.0).unwrap().is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogNormalModel {
    location: f64,
    scale: f64,
    dist: LogNormal,
}

impl LogNormalModel {
    /// Model name used in catalogs and pricing configuration.
    pub const NAME: &'static str = "LogNormal";

    /// Creates a log-normal model.
    pub fn new(location: f64, scale: f64) -> Result<Self, ModelError> {
        check_location_scale(location, scale)?;
        let dist = LogNormal::new(location, scale).map_err(|e| ModelError::Construction {
            model: Self::NAME,
            message: e.to_string(),
        })?;
        Ok(Self {
            location,
            scale,
            dist,
        })
    }

    /// Log-mean.
    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Log-standard-deviation.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Density at `x`, with `x` clamped to [`LOGNORMAL_X_FLOOR`] when it lies
    /// within [`LOGNORMAL_X_TOLERANCE`] of it.
    pub fn density(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        Ok(self.dist.pdf(clamp_to_floor(x)))
    }

    /// Cumulative distribution at `x`.
    pub fn cdf(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        Ok(self.dist.cdf(x))
    }
}

#[inline]
fn clamp_to_floor(x: f64) -> f64 {
    if (x - LOGNORMAL_X_FLOOR).abs() <= LOGNORMAL_X_TOLERANCE {
        LOGNORMAL_X_FLOOR
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn reference(x: f64, mu: f64, sigma: f64) -> f64 {
        (-(x.ln() - mu).powi(2) / (2.0 * sigma * sigma)).exp() / (x * sigma * (2.0 * PI).sqrt())
    }

    #[test]
    fn test_reference_density() {
        let model = LogNormalModel::new(1.0, 0.5).unwrap();
        for x in [0.5, 1.0, 2.718281828, 5.0] {
            assert_relative_eq!(
                model.density(x).unwrap(),
                reference(x, 1.0, 0.5),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_clamp_near_zero() {
        assert_eq!(clamp_to_floor(0.0), LOGNORMAL_X_FLOOR);
        assert_eq!(clamp_to_floor(1.5e-5), LOGNORMAL_X_FLOOR);
        assert_eq!(clamp_to_floor(1.0), 1.0);

        let model = LogNormalModel::new(10.0, 3.0).unwrap();
        assert_eq!(
            model.density(0.0).unwrap(),
            model.density(LOGNORMAL_X_FLOOR).unwrap()
        );
    }

    #[test]
    fn test_cdf_at_median() {
        let model = LogNormalModel::new(2.0, 0.3).unwrap();
        assert_relative_eq!(model.cdf(2.0_f64.exp()).unwrap(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LogNormalModel::new(-1.0, 1.0).is_err());
        assert!(LogNormalModel::new(1.0, 0.0).is_err());
    }
}
