//! Knock-out barrier payoff.

use crate::models::DistributionModel;

use super::direction::Direction;
use super::error::InstrumentError;
use super::params::{check_barrier, check_strike, check_underlying};

/// Barrier payoff: `max(flag * (S - K), 0)` while `flag * (S - B) < 0`,
/// zero once the underlying reaches the barrier.
///
/// Construction requires `flag * (B - K) >= 0`: a call's barrier sits at or
/// above its strike, a put's at or below.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Barrier;
/// use pricer_models::models::LogNormalModel;
///
/// let model = LogNormalModel::new(15.0, 3.0).unwrap().into();
/// let call = Barrier::new(15.0, 20.0, 1, model).unwrap();
/// assert_eq!(call.payoff_function(18.0).unwrap(), 3.0);
/// assert_eq!(call.payoff_function(20.0).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Barrier {
    strike: f64,
    barrier: f64,
    direction: Direction,
    model: DistributionModel,
}

impl Barrier {
    /// Creates a barrier payoff.
    ///
    /// # Arguments
    /// * `strike` - Strike (non-negative)
    /// * `barrier` - Knock-out level (non-negative, on the correct side of the strike)
    /// * `call_put_flag` - +1 for a call, -1 for a put
    /// * `model` - Distribution of the underlying
    pub fn new(
        strike: f64,
        barrier: f64,
        call_put_flag: i32,
        model: DistributionModel,
    ) -> Result<Self, InstrumentError> {
        let direction = Direction::from_flag(call_put_flag)?;
        let strike = check_strike(strike)?;
        let barrier = check_barrier(barrier)?;
        if direction.sign() * (barrier - strike) < 0.0 {
            return Err(InstrumentError::BarrierOrdering {
                strike,
                barrier,
                flag: call_put_flag,
            });
        }
        Ok(Self {
            strike,
            barrier,
            direction,
            model,
        })
    }

    /// Evaluates the payoff at `underlying`.
    #[inline]
    pub fn payoff_function(&self, underlying: f64) -> Result<f64, InstrumentError> {
        let s = check_underlying(underlying)?;
        let sign = self.direction.sign();
        if sign * (s - self.barrier) < 0.0 {
            Ok((sign * (s - self.strike)).max(0.0))
        } else {
            Ok(0.0)
        }
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Knock-out level.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GammaModel;

    fn model() -> DistributionModel {
        GammaModel::new(9.0, 3.0).unwrap().into()
    }

    #[test]
    fn test_up_and_out_call() {
        let call = Barrier::new(15.0, 20.0, 1, model()).unwrap();
        assert_eq!(call.payoff_function(10.0).unwrap(), 0.0);
        assert_eq!(call.payoff_function(17.0).unwrap(), 2.0);
        assert_eq!(call.payoff_function(20.0).unwrap(), 0.0);
        assert_eq!(call.payoff_function(25.0).unwrap(), 0.0);
    }

    #[test]
    fn test_down_and_out_put() {
        let put = Barrier::new(15.0, 10.0, -1, model()).unwrap();
        assert_eq!(put.payoff_function(20.0).unwrap(), 0.0);
        assert_eq!(put.payoff_function(12.0).unwrap(), 3.0);
        assert_eq!(put.payoff_function(10.0).unwrap(), 0.0);
        assert_eq!(put.payoff_function(5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_barrier_on_wrong_side_rejected() {
        assert_eq!(
            Barrier::new(15.0, 10.0, 1, model()),
            Err(InstrumentError::BarrierOrdering {
                strike: 15.0,
                barrier: 10.0,
                flag: 1,
            })
        );
        assert!(Barrier::new(15.0, 20.0, -1, model()).is_err());
    }

    #[test]
    fn test_barrier_equal_to_strike_allowed() {
        let call = Barrier::new(15.0, 15.0, 1, model()).unwrap();
        // knocked out everywhere the call would pay
        assert_eq!(call.payoff_function(16.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_barrier_rejected() {
        assert!(matches!(
            Barrier::new(0.0, -1.0, -1, model()),
            Err(InstrumentError::InvalidBarrier { .. })
        ));
    }
}
