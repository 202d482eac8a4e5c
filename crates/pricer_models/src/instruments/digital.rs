//! Digital (cash-or-nothing) payoff.

use crate::models::DistributionModel;

use super::direction::Direction;
use super::error::InstrumentError;
use super::params::{check_strike, check_underlying};

/// Digital payoff: `1` if `flag * (S - K) >= 0`, else `0`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Digital;
/// use pricer_models::models::LogNormalModel;
///
/// let model = LogNormalModel::new(10.0, 3.0).unwrap().into();
/// let call = Digital::new(7.0, 1, model).unwrap();
/// assert_eq!(call.payoff_function(7.0).unwrap(), 1.0);
/// assert_eq!(call.payoff_function(6.9).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Digital {
    strike: f64,
    direction: Direction,
    model: DistributionModel,
}

impl Digital {
    /// Creates a digital payoff.
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

    /// Evaluates the payoff at `underlying`. The strike itself pays out for
    /// both orientations.
    #[inline]
    pub fn payoff_function(&self, underlying: f64) -> Result<f64, InstrumentError> {
        let s = check_underlying(underlying)?;
        if self.direction.sign() * (s - self.strike) >= 0.0 {
            Ok(1.0)
        } else {
            Ok(0.0)
        }
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
