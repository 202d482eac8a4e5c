//! Gamma distribution model.
//!
//! Shape = location, scale = scale (rate = 1 / scale).

use statrs::distribution::{Continuous, ContinuousCDF, Gamma};

use super::error::{check_argument, check_location_scale, ModelError};

/// Gamma density over the terminal value of the underlying.
///
/// # Examples
/// ```
/// use pricer_models::models::GammaModel;
///
/// let model = GammaModel::new(2.0, 1.0).unwrap();
/// // x * exp(-x) at x = 1
/// assert!((model.density(1.0).unwrap() - (-1.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GammaModel {
    location: f64,
    scale: f64,
    dist: Gamma,
}

impl GammaModel {
    /// Model name used in catalogs and pricing configuration.
    pub const NAME: &'static str = "Gamma";

    /// Creates a Gamma model with shape `location` and scale `scale`.
    pub fn new(location: f64, scale: f64) -> Result<Self, ModelError> {
        check_location_scale(location, scale)?;
        let dist = Gamma::new(location, 1.0 / scale).map_err(|e| ModelError::Construction {
            model: Self::NAME,
            message: e.to_string(),
        })?;
        Ok(Self {
            location,
            scale,
            dist,
        })
    }

    /// Shape parameter.
    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Density at `x`.
    ///
    /// Fails for negative `x`, and at `x = 0` when the shape is below one
    /// (the density diverges there).
    pub fn density(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        let value = self.dist.pdf(x);
        if !value.is_finite() {
            return Err(ModelError::NonFiniteDensity {
                model: Self::NAME,
                x,
            });
        }
        Ok(value)
    }

    /// Cumulative distribution at `x`.
    pub fn cdf(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        Ok(self.dist.cdf(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_special_case() {
        // shape 1 reduces to an exponential with mean `scale`
        let model = GammaModel::new(1.0, 2.0).unwrap();
        assert_relative_eq!(model.density(0.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            model.density(2.0).unwrap(),
            0.5 * (-1.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_reference_density() {
        // Gamma(k=9, theta=3) at x=27: x^8 e^{-9} / (8! 3^9)
        let model = GammaModel::new(9.0, 3.0).unwrap();
        let expected = 27.0_f64.powi(8) * (-9.0_f64).exp() / (40320.0 * 3.0_f64.powi(9));
        assert_relative_eq!(model.density(27.0).unwrap(), expected, max_relative = 1e-10);
    }

    #[test]
    fn test_singular_at_zero_for_small_shape() {
        let model = GammaModel::new(0.5, 1.0).unwrap();
        assert!(matches!(
            model.density(0.0),
            Err(ModelError::NonFiniteDensity { .. })
        ));
        assert!(model.density(0.1).unwrap() > 0.0);
    }

    #[test]
    fn test_cdf_monotone() {
        let model = GammaModel::new(9.0, 3.0).unwrap();
        let a = model.cdf(10.0).unwrap();
        let b = model.cdf(30.0).unwrap();
        assert!(a < b);
        assert!(b < 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(GammaModel::new(0.0, 1.0).is_err());
        assert!(GammaModel::new(1.0, 0.0).is_err());
        assert!(GammaModel::new(1.0, 1.0).unwrap().density(-1.0).is_err());
    }
}
