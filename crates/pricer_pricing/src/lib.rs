//! # Pricer Pricing (Layer 3: Pricing Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns a payoff and its distribution model into a price:
//! - [`grid`]: trapezoidal integration of `payoff(x) * density(x)` over a
//!   uniform grid, available for every payoff/model pair
//! - [`exact`]: capability-gated exact-evaluation backends
//! - [`method`]: the pricing-method names understood by the dispatcher
//! - [`dispatcher`]: method resolution, grid fallback and portfolio pricing
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::math::GridSettings;
//! use pricer_models::instruments::PlainVanilla;
//! use pricer_models::models::UniformModel;
//! use pricer_pricing::grid::grid_eval;
//!
//! let model = UniformModel::new(10.0, 3.0).unwrap().into();
//! let payoff = PlainVanilla::new(10.0, 1, model).unwrap().into();
//! let settings = GridSettings::new(1.0, 0.5, 100.0).unwrap();
//!
//! let price = grid_eval(&payoff, &settings).unwrap();
//! assert!((price - 0.875).abs() < 1e-12);
//! ```
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, `GridSettings`, trapezoidal rule
//! - Layer 2 (pricer_models): `Payoff`, `DistributionModel`, `Deal`, `Portfolio`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dispatcher;
pub mod exact;
pub mod grid;
pub mod method;

pub use dispatcher::{DealOutcome, MethodResolver, PriceDispatcher, Quote};
pub use exact::{ClosedFormBackend, ExactBackend, UnavailableBackend};
pub use grid::{grid_eval, GridPricer};
pub use method::PricingMethod;
