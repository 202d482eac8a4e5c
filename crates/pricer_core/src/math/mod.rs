//! Numerical building blocks.
//!
//! - [`grid`]: Uniform integration grid and trapezoidal rule

pub mod grid;

pub use grid::{trapezoidal_sum, GridPoints, GridSettings, TrapezoidalAccumulator};
