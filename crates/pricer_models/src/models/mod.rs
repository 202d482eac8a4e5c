//! Distribution models for the terminal value of the underlying.
//!
//! Each model is parameterised by a location and a scale, both strictly
//! positive, and exposes a density over non-negative arguments.
//!
//! ## Available Models
//!
//! - [`GammaModel`]: shape/scale gamma density
//! - [`LogNormalModel`]: log-normal density with a floor near zero
//! - [`UniformModel`]: uniform density with matching mean and variance
//!
//! [`DistributionModel`] wraps them for static dispatch.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{DistributionModel, UniformModel};
//!
//! let model = DistributionModel::Uniform(UniformModel::new(10.0, 3.0).unwrap());
//! assert_eq!(model.name(), "Uniform");
//! assert!(model.density(10.0).unwrap() > 0.0);
//! ```

mod error;
pub mod gamma;
pub mod lognormal;
pub mod uniform;

pub use error::ModelError;
pub use gamma::GammaModel;
pub use lognormal::{LogNormalModel, LOGNORMAL_X_FLOOR, LOGNORMAL_X_TOLERANCE};
pub use uniform::UniformModel;

use std::fmt;

/// Distribution model enum for static dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionModel {
    /// Gamma density (shape = location)
    Gamma(GammaModel),
    /// Log-normal density (log-mean = location, log-std = scale)
    LogNormal(LogNormalModel),
    /// Uniform density (mean = location, variance = scale)
    Uniform(UniformModel),
}

impl DistributionModel {
    /// Model name as used in catalogs and pricing configuration.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionModel::Gamma(_) => GammaModel::NAME,
            DistributionModel::LogNormal(_) => LogNormalModel::NAME,
            DistributionModel::Uniform(_) => UniformModel::NAME,
        }
    }

    /// Location parameter.
    pub fn location(&self) -> f64 {
        match self {
            DistributionModel::Gamma(m) => m.location(),
            DistributionModel::LogNormal(m) => m.location(),
            DistributionModel::Uniform(m) => m.location(),
        }
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        match self {
            DistributionModel::Gamma(m) => m.scale(),
            DistributionModel::LogNormal(m) => m.scale(),
            DistributionModel::Uniform(m) => m.scale(),
        }
    }

    /// Probability density at `x >= 0`.
    #[inline]
    pub fn density(&self, x: f64) -> Result<f64, ModelError> {
        match self {
            DistributionModel::Gamma(m) => m.density(x),
            DistributionModel::LogNormal(m) => m.density(x),
            DistributionModel::Uniform(m) => m.density(x),
        }
    }

    /// Cumulative distribution at `x >= 0`.
    pub fn cdf(&self, x: f64) -> Result<f64, ModelError> {
        match self {
            DistributionModel::Gamma(m) => m.cdf(x),
            DistributionModel::LogNormal(m) => m.cdf(x),
            DistributionModel::Uniform(m) => m.cdf(x),
        }
    }
}

impl From<GammaModel> for DistributionModel {
    fn from(model: GammaModel) -> Self {
        DistributionModel::Gamma(model)
    }
}

impl From<LogNormalModel> for DistributionModel {
    fn from(model: LogNormalModel) -> Self {
        DistributionModel::LogNormal(model)
    }
}

impl From<UniformModel> for DistributionModel {
    fn from(model: UniformModel) -> Self {
        DistributionModel::Uniform(model)
    }
}

impl fmt::Display for DistributionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(location={}, scale={})",
            self.name(),
            self.location(),
            self.scale()
        )
    }
}
