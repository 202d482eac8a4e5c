//! Name-based construction of distribution models.

use std::collections::BTreeMap;

use pricer_core::types::PricingError;

use crate::models::{DistributionModel, GammaModel, LogNormalModel, ModelError, UniformModel};

/// Constructor registered for a model name.
pub type ModelConstructor = fn(f64, f64) -> Result<DistributionModel, ModelError>;

/// Registry resolving distribution names to constructors.
///
/// # Examples
/// ```
/// use pricer_models::factory::ModelFactory;
/// use pricer_core::types::PricingError;
///
/// let factory = ModelFactory::with_defaults();
/// let model = factory.create("LogNormal", 10.0, 3.0).unwrap();
/// assert_eq!(model.name(), "LogNormal");
///
/// assert!(matches!(
///     factory.create("Weibull", 1.0, 1.0),
///     Err(PricingError::UnknownModel(_))
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct ModelFactory {
    registry: BTreeMap<String, ModelConstructor>,
}

impl ModelFactory {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            registry: BTreeMap::new(),
        }
    }

    /// Creates a registry with the built-in models (Gamma, LogNormal, Uniform).
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        factory.register(GammaModel::NAME, |location, scale| {
            GammaModel::new(location, scale).map(DistributionModel::from)
        });
        factory.register(LogNormalModel::NAME, |location, scale| {
            LogNormalModel::new(location, scale).map(DistributionModel::from)
        });
        factory.register(UniformModel::NAME, |location, scale| {
            UniformModel::new(location, scale).map(DistributionModel::from)
        });
        factory
    }

    /// Registers (or replaces) the constructor for `name`.
    ///
    /// Returns the previously registered constructor, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: ModelConstructor,
    ) -> Option<ModelConstructor> {
        self.registry.insert(name.into(), constructor)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Builds the model registered under `name`.
    ///
    /// # Errors
    /// - `PricingError::UnknownModel` if `name` is not registered
    /// - `PricingError::Validation` if location or scale are invalid
    pub fn create(
        &self,
        name: &str,
        location: f64,
        scale: f64,
    ) -> Result<DistributionModel, PricingError> {
        let constructor = self
            .registry
            .get(name)
            .ok_or_else(|| PricingError::UnknownModel(name.to_string()))?;
        Ok(constructor(location, scale)?)
    }
}

impl Default for ModelFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
