//! Pricing-method names.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Pricing method selected per payoff type and distribution.
///
/// # Examples
/// ```
/// use pricer_pricing::PricingMethod;
///
/// assert_eq!("grid_eval".parse::<PricingMethod>().unwrap(), PricingMethod::Grid);
/// assert_eq!(PricingMethod::Exact.name(), "exact_eval");
/// assert!("monte_carlo".parse::<PricingMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingMethod {
    /// Trapezoidal integration on the settings grid.
    Grid,
    /// Exact backend, grid when the backend cannot serve the payoff.
    Exact,
}

impl PricingMethod {
    /// Configuration name of the method.
    pub fn name(self) -> &'static str {
        match self {
            PricingMethod::Grid => "grid_eval",
            PricingMethod::Exact => "exact_eval",
        }
    }
}

impl FromStr for PricingMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid_eval" => Ok(PricingMethod::Grid),
            "exact_eval" => Ok(PricingMethod::Exact),
            other => Err(PricingError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
