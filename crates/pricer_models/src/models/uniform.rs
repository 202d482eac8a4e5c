//! Uniform distribution model.
//!
//! Parameterised so that location and scale are the mean and variance of
//! the law: support `[location - √(3·scale), location + √(3·scale)]`.

use statrs::distribution::{Continuous, ContinuousCDF, Uniform};

use super::error::{check_argument, check_location_scale, ModelError};

/// Uniform density over the terminal value of the underlying.
///
/// # Examples
/// ```
/// use pricer_models::models::UniformModel;
///
/// let model = UniformModel::new(10.0, 3.0).unwrap();
/// assert_eq!(model.bounds(), (7.0, 13.0));
/// assert!((model.density(10.0).unwrap() - 1.0 / 6.0).abs() < 1e-12);
/// assert_eq!(model.density(14.0).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformModel {
    location: f64,
    scale: f64,
    dist: Uniform,
}

impl UniformModel {
    /// Model name used in catalogs and pricing configuration.
    pub const NAME: &'static str = "Uniform";

    /// Creates a uniform model with mean `location` and variance `scale`.
    pub fn new(location: f64, scale: f64) -> Result<Self, ModelError> {
        check_location_scale(location, scale)?;
        let half_width = (3.0 * scale).sqrt();
        let dist = Uniform::new(location - half_width, location + half_width).map_err(|e| {
            ModelError::Construction {
                model: Self::NAME,
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            location,
            scale,
            dist,
        })
    }

    /// Mean of the law.
    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Variance of the law.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Support `(a, b)`.
    pub fn bounds(&self) -> (f64, f64) {
        let half_width = (3.0 * self.scale).sqrt();
        (self.location - half_width, self.location + half_width)
    }

    /// Density at `x`: `1/(b-a)` on `[a, b]`, zero elsewhere.
    pub fn density(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        Ok(self.dist.pdf(x))
    }

    /// Cumulative distribution at `x`.
    pub fn cdf(&self, x: f64) -> Result<f64, ModelError> {
        check_argument(x)?;
        Ok(self.dist.cdf(x))
    }
}
