//! Exact-evaluation backends.
//!
//! An exact backend prices a payoff without the integration grid. Backends
//! are capability-gated: the dispatcher asks [`ExactBackend::supports`]
//! first and prices on the grid when the answer is no.
//!
//! ## Available Backends
//!
//! - [`UnavailableBackend`]: supports nothing (every exact request uses the grid)
//! - [`ClosedFormBackend`]: digital payoffs under Gamma and LogNormal models,
//!   priced from the model CDF

use std::fmt::Debug;

use pricer_core::types::PricingError;
use pricer_models::instruments::{Direction, Payoff};
use pricer_models::models::DistributionModel;

/// Exact pricing provider.
pub trait ExactBackend: Debug + Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the backend can price `payoff`.
    fn supports(&self, payoff: &Payoff) -> bool;

    /// Prices `payoff`.
    ///
    /// Only called when [`supports`](ExactBackend::supports) returned `true`.
    fn price(&self, payoff: &Payoff) -> Result<f64, PricingError>;
}

/// Backend with no capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnavailableBackend;

impl ExactBackend for UnavailableBackend {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn supports(&self, _payoff: &Payoff) -> bool {
        false
    }

    fn price(&self, payoff: &Payoff) -> Result<f64, PricingError> {
        Err(PricingError::validation(format!(
            "exact evaluation unavailable for {}",
            payoff.name()
        )))
    }
}

/// Closed-form backend for digital payoffs.
///
/// For strike `K` and model CDF `F`: put = `F(K)`, call = `1 - F(K)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Digital;
/// use pricer_models::models::GammaModel;
/// use pricer_pricing::exact::{ClosedFormBackend, ExactBackend};
///
/// let model = GammaModel::new(9.0, 3.0).unwrap();
/// let payoff = Digital::new(15.0, -1, model.clone().into()).unwrap().into();
///
/// let backend = ClosedFormBackend;
/// assert!(backend.supports(&payoff));
/// assert_eq!(backend.price(&payoff).unwrap(), model.cdf(15.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormBackend;

impl ExactBackend for ClosedFormBackend {
    fn name(&self) -> &'static str {
        "closed-form"
    }

    fn supports(&self, payoff: &Payoff) -> bool {
        matches!(
            (payoff, payoff.model()),
            (
                Payoff::Digital(_),
                DistributionModel::Gamma(_) | DistributionModel::LogNormal(_)
            )
        )
    }

    fn price(&self, payoff: &Payoff) -> Result<f64, PricingError> {
        if !self.supports(payoff) {
            return Err(PricingError::validation(format!(
                "closed form not available for {} under {}",
                payoff.name(),
                payoff.model().name()
            )));
        }
        let below = payoff.model().cdf(payoff.strike())?;
        Ok(match payoff.direction() {
            Direction::Put => below,
            Direction::Call => 1.0 - below,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{Barrier, Digital, PlainVanilla};
    use pricer_models::models::{GammaModel, LogNormalModel, UniformModel};

    #[test]
    fn test_unavailable_supports_nothing() {
        let model = GammaModel::new(9.0, 3.0).unwrap().into();
        let payoff = Digital::new(15.0, 1, model).unwrap().into();
        assert!(!UnavailableBackend.supports(&payoff));
        assert!(UnavailableBackend.price(&payoff).is_err());
    }

    #[test]
    fn test_closed_form_capabilities() {
        let gamma: DistributionModel = GammaModel::new(9.0, 3.0).unwrap().into();
        let lognormal: DistributionModel = LogNormalModel::new(2.0, 0.5).unwrap().into();
        let uniform: DistributionModel = UniformModel::new(10.0, 3.0).unwrap().into();

        let backend = ClosedFormBackend;
        assert!(backend.supports(&Digital::new(7.0, 1, gamma.clone()).unwrap().into()));
        assert!(backend.supports(&Digital::new(7.0, 1, lognormal).unwrap().into()));
        assert!(!backend.supports(&Digital::new(7.0, 1, uniform).unwrap().into()));
        assert!(!backend.supports(&PlainVanilla::new(7.0, 1, gamma.clone()).unwrap().into()));
        assert!(!backend.supports(&Barrier::new(7.0, 9.0, 1, gamma).unwrap().into()));
    }

    #[test]
    fn test_call_and_put_complement() {
        let model: DistributionModel = LogNormalModel::new(2.0, 0.5).unwrap().into();
        let call = Digital::new(7.0, 1, model.clone()).unwrap().into();
        let put = Digital::new(7.0, -1, model).unwrap().into();
        let backend = ClosedFormBackend;
        let total = backend.price(&call).unwrap() + backend.price(&put).unwrap();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unsupported_payoff_is_error() {
        let model = UniformModel::new(10.0, 3.0).unwrap().into();
        let payoff = Digital::new(10.0, 1, model).unwrap().into();
        assert!(ClosedFormBackend.price(&payoff).unwrap_err().is_validation());
    }
}
