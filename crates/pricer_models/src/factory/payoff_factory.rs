//! Name-based construction of payoffs.

use std::collections::{BTreeMap, BTreeSet};

use pricer_core::types::PricingError;

use crate::instruments::{Barrier, Digital, Payoff, PayoffType, PlainVanilla};
use crate::models::DistributionModel;

/// Arguments handed to a payoff constructor.
///
/// `parameters` holds the variant-specific numeric parameters by name
/// (e.g. `strike`, `barrier`); orientation and model are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffArgs {
    /// Named numeric parameters
    pub parameters: BTreeMap<String, f64>,
    /// Call/put flag (+1 / -1)
    pub call_put_flag: i32,
    /// Distribution of the underlying
    pub model: DistributionModel,
}

impl PayoffArgs {
    /// Creates arguments with no named parameters.
    pub fn new(call_put_flag: i32, model: DistributionModel) -> Self {
        Self {
            parameters: BTreeMap::new(),
            call_put_flag,
            model,
        }
    }

    /// Adds a named parameter.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Reads a named parameter.
    pub fn get(&self, name: &str) -> Result<f64, PricingError> {
        self.parameters
            .get(name)
            .copied()
            .ok_or_else(|| PricingError::validation(format!("missing parameter '{}'", name)))
    }
}

/// Constructor registered for a payoff type.
pub type PayoffConstructor = fn(&PayoffArgs) -> Result<Payoff, PricingError>;

/// Registry entry: required parameter names plus constructor.
#[derive(Debug, Clone)]
pub struct PayoffRegistration {
    /// Names the constructor expects in [`PayoffArgs::parameters`]
    pub required: Vec<String>,
    /// Constructor
    pub constructor: PayoffConstructor,
}

impl PayoffRegistration {
    /// Creates a registration.
    pub fn new(required: &[&str], constructor: PayoffConstructor) -> Self {
        Self {
            required: required.iter().map(|s| s.to_string()).collect(),
            constructor,
        }
    }
}

/// Registry resolving payoff type names to constructors.
///
/// # Examples
/// ```
/// use pricer_models::factory::{ModelFactory, PayoffArgs, PayoffFactory};
/// use pricer_core::types::PricingError;
///
/// let model = ModelFactory::default().create("Uniform", 10.0, 3.0).unwrap();
/// let factory = PayoffFactory::with_defaults();
///
/// let args = PayoffArgs::new(1, model.clone()).with("strike", 10.0);
/// let payoff = factory.create("PlainVanilla", args).unwrap();
/// assert_eq!(payoff.name(), "Call Payoff");
///
/// // Barrier also requires a "barrier" parameter
/// let args = PayoffArgs::new(1, model).with("strike", 10.0);
/// assert!(matches!(
///     factory.create("Barrier", args),
///     Err(PricingError::ArgumentMismatch { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct PayoffFactory {
    registry: BTreeMap<String, PayoffRegistration>,
}

impl PayoffFactory {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            registry: BTreeMap::new(),
        }
    }

    /// Creates a registry with the built-in payoffs.
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        factory.register(
            PayoffType::PlainVanilla.name(),
            PayoffRegistration::new(&["strike"], |args| {
                Ok(PlainVanilla::new(args.get("strike")?, args.call_put_flag, args.model.clone())?
                    .into())
            }),
        );
        factory.register(
            PayoffType::Digital.name(),
            PayoffRegistration::new(&["strike"], |args| {
                Ok(Digital::new(args.get("strike")?, args.call_put_flag, args.model.clone())?
                    .into())
            }),
        );
        factory.register(
            PayoffType::Barrier.name(),
            PayoffRegistration::new(&["strike", "barrier"], |args| {
                Ok(Barrier::new(
                    args.get("strike")?,
                    args.get("barrier")?,
                    args.call_put_flag,
                    args.model.clone(),
                )?
                .into())
            }),
        );
        factory
    }

    /// Registers (or replaces) a payoff type.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        registration: PayoffRegistration,
    ) -> Option<PayoffRegistration> {
        self.registry.insert(name.into(), registration)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Parameter names required by `name`.
    pub fn required_parameters(&self, name: &str) -> Result<&[String], PricingError> {
        self.registry
            .get(name)
            .map(|r| r.required.as_slice())
            .ok_or_else(|| PricingError::UnknownType(name.to_string()))
    }

    /// Builds the payoff registered under `type_name`.
    ///
    /// # Errors
    /// - `PricingError::UnknownType` if `type_name` is not registered
    /// - `PricingError::ArgumentMismatch` if the parameter names differ from
    ///   the required set (missing or extra names)
    /// - `PricingError::Validation` if a value fails payoff validation
    pub fn create(&self, type_name: &str, args: PayoffArgs) -> Result<Payoff, PricingError> {
        let registration = self
            .registry
            .get(type_name)
            .ok_or_else(|| PricingError::UnknownType(type_name.to_string()))?;

        let expected: BTreeSet<&str> = registration.required.iter().map(String::as_str).collect();
        let supplied: BTreeSet<&str> = args.parameters.keys().map(String::as_str).collect();
        if expected != supplied {
            return Err(PricingError::ArgumentMismatch {
                payoff: type_name.to_string(),
                expected: expected.iter().map(|s| s.to_string()).collect(),
                supplied: supplied.iter().map(|s| s.to_string()).collect(),
            });
        }

        (registration.constructor)(&args)
    }
}

impl Default for PayoffFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
