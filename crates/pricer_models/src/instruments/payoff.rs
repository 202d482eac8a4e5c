//! Payoff enum for static dispatch over the payoff variants.

use std::fmt;

use crate::models::DistributionModel;

use super::barrier::Barrier;
use super::digital::Digital;
use super::direction::Direction;
use super::error::InstrumentError;
use super::vanilla::PlainVanilla;

/// Payoff family, independent of orientation.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Barrier.name(), "Barrier");
/// assert_eq!(PayoffType::Digital.to_string(), "Digital");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffType {
    /// `max(flag * (S - K), 0)`
    PlainVanilla,
    /// `1{flag * (S - K) >= 0}`
    Digital,
    /// Vanilla payoff knocked out at the barrier
    Barrier,
}

impl PayoffType {
    /// Type name as used in catalogs and pricing configuration.
    pub fn name(self) -> &'static str {
        match self {
            PayoffType::PlainVanilla => "PlainVanilla",
            PayoffType::Digital => "Digital",
            PayoffType::Barrier => "Barrier",
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payoff enum wrapping every payoff variant together with its model.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Payoff, PlainVanilla};
/// use pricer_models::models::UniformModel;
///
/// let model = UniformModel::new(10.0, 3.0).unwrap().into();
/// let payoff = Payoff::PlainVanilla(PlainVanilla::new(10.0, -1, model).unwrap());
/// assert_eq!(payoff.name(), "Put Payoff");
/// assert_eq!(payoff.payoff_function(4.0).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Payoff {
    /// Plain vanilla call or put
    PlainVanilla(PlainVanilla),
    /// Digital call or put
    Digital(Digital),
    /// Knock-out barrier call or put
    Barrier(Barrier),
}

impl Payoff {
    /// Evaluates the payoff at a non-negative underlying value.
    #[inline]
    pub fn payoff_function(&self, underlying: f64) -> Result<f64, InstrumentError> {
        match self {
            Payoff::PlainVanilla(p) => p.payoff_function(underlying),
            Payoff::Digital(p) => p.payoff_function(underlying),
            Payoff::Barrier(p) => p.payoff_function(underlying),
        }
    }

    /// Payoff family.
    pub fn payoff_type(&self) -> PayoffType {
        match self {
            Payoff::PlainVanilla(_) => PayoffType::PlainVanilla,
            Payoff::Digital(_) => PayoffType::Digital,
            Payoff::Barrier(_) => PayoffType::Barrier,
        }
    }

    /// Human-readable name, e.g. `"Digital Put Payoff"`.
    pub fn name(&self) -> &'static str {
        match (self.payoff_type(), self.direction()) {
            (PayoffType::PlainVanilla, Direction::Call) => "Call Payoff",
            (PayoffType::PlainVanilla, Direction::Put) => "Put Payoff",
            (PayoffType::Digital, Direction::Call) => "Digital Call Payoff",
            (PayoffType::Digital, Direction::Put) => "Digital Put Payoff",
            (PayoffType::Barrier, Direction::Call) => "Barrier Call Payoff",
            (PayoffType::Barrier, Direction::Put) => "Barrier Put Payoff",
        }
    }

    /// Call/put orientation.
    pub fn direction(&self) -> Direction {
        match self {
            Payoff::PlainVanilla(p) => p.direction(),
            Payoff::Digital(p) => p.direction(),
            Payoff::Barrier(p) => p.direction(),
        }
    }

    /// Strike.
    pub fn strike(&self) -> f64 {
        match self {
            Payoff::PlainVanilla(p) => p.strike(),
            Payoff::Digital(p) => p.strike(),
            Payoff::Barrier(p) => p.strike(),
        }
    }

    /// Knock-out level, for barrier payoffs only.
    pub fn barrier(&self) -> Option<f64> {
        match self {
            Payoff::Barrier(p) => Some(p.barrier()),
            _ => None,
        }
    }

    /// Distribution of the underlying.
    pub fn model(&self) -> &DistributionModel {
        match self {
            Payoff::PlainVanilla(p) => p.model(),
            Payoff::Digital(p) => p.model(),
            Payoff::Barrier(p) => p.model(),
        }
    }

    /// Named payoff parameters, call/put flag last.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        let mut params = vec![("strike", self.strike())];
        if let Some(barrier) = self.barrier() {
            params.push(("barrier", barrier));
        }
        params.push(("call_put_flag", self.direction().sign()));
        params
    }
}

impl From<PlainVanilla> for Payoff {
    fn from(p: PlainVanilla) -> Self {
        Payoff::PlainVanilla(p)
    }
}

impl From<Digital> for Payoff {
    fn from(p: Digital) -> Self {
        Payoff::Digital(p)
    }
}

impl From<Barrier> for Payoff {
    fn from(p: Barrier) -> Self {
        Payoff::Barrier(p)
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self
            .parameters()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        write!(
            f,
            "{}\n  + Payoff Parameters: {}\n  + Model Parameters: {}",
            self.name(),
            params.join(", "),
            self.model()
        )
    }
}
