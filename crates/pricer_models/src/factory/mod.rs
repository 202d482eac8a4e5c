//! Registries that turn configuration names into typed objects.
//!
//! - [`PayoffFactory`]: payoff type name + [`PayoffArgs`] → [`Payoff`](crate::instruments::Payoff)
//! - [`ModelFactory`]: distribution name + location/scale → [`DistributionModel`](crate::models::DistributionModel)
//!
//! Both are explicit maps from name to constructor, populated by
//! `with_defaults()` and open to extension through `register`.

mod model_factory;
mod payoff_factory;

pub use model_factory::{ModelConstructor, ModelFactory};
pub use payoff_factory::{PayoffArgs, PayoffConstructor, PayoffFactory, PayoffRegistration};
