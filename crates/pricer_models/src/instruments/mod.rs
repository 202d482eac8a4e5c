//! Payoff definitions.
//!
//! This module provides the payoff variants priced by the engine, each
//! owning the distribution model of its underlying.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - [`Payoff`] wraps all payoff variants
//! - Every constructor validates its parameters and returns
//!   [`InstrumentError`] on failure
//!
//! # Payoff Types
//!
//! - [`PlainVanilla`]: `max(flag * (S - K), 0)`
//! - [`Digital`]: `1` if `flag * (S - K) >= 0`
//! - [`Barrier`]: vanilla payoff knocked out at `B`
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Payoff, Digital};
//! use pricer_models::models::LogNormalModel;
//!
//! let model = LogNormalModel::new(10.0, 3.0).unwrap().into();
//! let payoff: Payoff = Digital::new(7.0, 1, model).unwrap().into();
//! assert_eq!(payoff.payoff_function(8.0).unwrap(), 1.0);
//! ```

mod barrier;
mod digital;
mod direction;
mod error;
mod params;
mod payoff;
mod vanilla;

pub use barrier::Barrier;
pub use digital::Digital;
pub use direction::Direction;
pub use error::InstrumentError;
pub use payoff::{Payoff, PayoffType};
pub use vanilla::PlainVanilla;
