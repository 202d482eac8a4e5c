//! # pricer_core: Foundation for the Payoff Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError` (`types::error`)
//! - Integration grid settings and the trapezoidal rule (`math::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::{trapezoidal_sum, GridSettings};
//!
//! let settings = GridSettings::new(0.0, 0.5, 2.0).unwrap();
//! let samples = settings.points().map(|x| x * settings.x_step);
//! // ∫_0^2 x dx = 2
//! assert!((trapezoidal_sum(samples) - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `GridSettings`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
