//! Plain vanilla payoff.

use crate::models::DistributionModel;

use super::direction::Direction;
use super::error::InstrumentError;
use super::params::{check_strike, check_underlying};

/// Plain vanilla payoff `max(flag * (S - K), 0)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PlainVanilla;
/// use pricer_models::models::UniformModel;
///
/// let model = UniformModel::new(10.0, 3.0).unwrap().into();
/// let call = PlainVanilla::new(10.0, 1, model).unwrap();
/// assert_eq!(call.payoff_function(12.5).unwrap(), 2.5);
/// assert_eq!(call.payoff_function(8.0).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlainVanilla {
    strike: f64,
    direction: Direction,
    model: DistributionModel,
}

impl PlainVanilla {
    /// Creates a plain vanilla payoff.
    ///
    /// # Arguments
    /// * `strike` - Strike (non-negative)
    /// * `call_put_flag` - +1 for a call, -1 for a put
    /// * `model` - Distribution of the underlying
    pub fn new(
        strike: f64,
        call_put_flag: i32,
        model: DistributionModel,
    ) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: check_strike(strike)?,
            direction: Direction::from_flag(call_put_flag)?,
            model,
        })
    }

    /// Evaluates the payoff at `underlying`.
    #[inline]
    pub fn payoff_function(&self, underlying: f64) -> Result<f64, InstrumentError> {
        let s = check_underlying(underlying)?;
        Ok((self.direction.sign() * (s - self.strike)).max(0.0))
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Call/put orientation.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Distribution of the underlying.
    #[inline]
    pub fn model(&self) -> &DistributionModel {
        &self.model
    }
}
