//! Grid (trapezoidal) evaluation.
//!
//! The price is the expected payoff
//! `∫ payoff(x) · density(x) dx` approximated on the grid described by
//! [`GridSettings`]:
//!
//! ```text
//! integral_i = payoff(x_i) * density(x_i) * x_step
//! price      = Σ integral_i - 0.5 * (integral_0 + integral_last)
//! ```

use pricer_core::math::{GridSettings, TrapezoidalAccumulator};
use pricer_core::types::PricingError;
use pricer_models::instruments::Payoff;

/// Grid pricer bound to validated settings.
///
/// # Examples
/// ```
/// use pricer_core::math::GridSettings;
/// use pricer_models::instruments::PlainVanilla;
/// use pricer_models::models::GammaModel;
/// use pricer_pricing::grid::GridPricer;
///
/// let pricer = GridPricer::new(GridSettings::new(1.0, 0.5, 100.0).unwrap()).unwrap();
/// let model = GammaModel::new(9.0, 3.0).unwrap().into();
/// let payoff = PlainVanilla::new(15.0, -1, model).unwrap().into();
///
/// let price = pricer.price(&payoff).unwrap();
/// assert!((price - 0.1616).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPricer {
    settings: GridSettings,
}

impl GridPricer {
    /// Creates a pricer, validating the settings.
    ///
    /// # Errors
    /// `PricingError::Validation` if the settings break the grid invariants.
    pub fn new(settings: GridSettings) -> Result<Self, PricingError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Returns the grid settings.
    #[inline]
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Prices `payoff` under its own distribution model.
    ///
    /// Samples are folded as they are produced, so memory use does not grow
    /// with the number of grid points.
    ///
    /// # Errors
    /// Propagates payoff or density evaluation failures as
    /// `PricingError::Validation`.
    pub fn price(&self, payoff: &Payoff) -> Result<f64, PricingError> {
        let step = self.settings.x_step;
        let model = payoff.model();
        let mut acc = TrapezoidalAccumulator::new();
        for x in self.settings.points() {
            acc.push(payoff.payoff_function(x)? * model.density(x)? * step);
        }
        Ok(acc.finish())
    }
}

/// Prices `payoff` on the grid described by `settings`.
///
/// # Errors
/// `PricingError::Validation` for invalid settings or a failed evaluation.
pub fn grid_eval(payoff: &Payoff, settings: &GridSettings) -> Result<f64, PricingError> {
    GridPricer::new(*settings)?.price(payoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{Barrier, Digital, PlainVanilla};
    use pricer_models::models::{DistributionModel, GammaModel, LogNormalModel, UniformModel};
    use proptest::prelude::*;

    fn settings() -> GridSettings {
        GridSettings::new(1.0, 0.5, 100.0).unwrap()
    }

    fn uniform() -> DistributionModel {
        UniformModel::new(10.0, 3.0).unwrap().into()
    }

    #[test]
    fn test_uniform_call_matches_hand_computation() {
        // Support [7, 13], density 1/6: (0.5 + 1 + ... + 3) / 6 * 0.5
        let payoff = PlainVanilla::new(10.0, 1, uniform()).unwrap().into();
        let price = grid_eval(&payoff, &settings()).unwrap();
        assert_relative_eq!(price, 0.875, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let payoff = PlainVanilla::new(10.0, 1, uniform()).unwrap().into();
        let bad = GridSettings {
            x_min: 1.0,
            x_step: 0.0,
            x_max: 100.0,
        };
        assert!(grid_eval(&payoff, &bad).unwrap_err().is_validation());
        assert!(GridPricer::new(bad).is_err());
    }

    #[test]
    fn test_matches_collected_samples() {
        let model: DistributionModel = GammaModel::new(9.0, 3.0).unwrap().into();
        let payoff: Payoff = PlainVanilla::new(15.0, -1, model.clone()).unwrap().into();
        let settings = GridSettings::new(0.0, 0.3, 1.0e2).unwrap();

        let samples: Vec<f64> = settings
            .points()
            .map(|x| payoff.payoff_function(x).unwrap() * model.density(x).unwrap() * settings.x_step)
            .collect();
        let expected = samples.iter().sum::<f64>() - 0.5 * (samples[0] + samples[samples.len() - 1]);

        assert_relative_eq!(grid_eval(&payoff, &settings).unwrap(), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_fine_grid_prices_in_constant_memory() {
        // 2 * 10^6 points; E[(S - 10)+] for S uniform on [7, 13] is 0.75
        let payoff = PlainVanilla::new(10.0, 1, uniform()).unwrap().into();
        let settings = GridSettings::new(0.0, 1.0e-5, 20.0).unwrap();
        let price = grid_eval(&payoff, &settings).unwrap();
        assert_relative_eq!(price, 0.75, epsilon = 1e-4);
    }

    #[test]
    fn test_singular_density_propagates() {
        // Shape 0.5 gamma density is infinite at zero.
        let model = GammaModel::new(0.5, 1.0).unwrap().into();
        let payoff = Digital::new(0.0, 1, model).unwrap().into();
        let settings = GridSettings::new(0.0, 0.5, 10.0).unwrap();
        assert!(grid_eval(&payoff, &settings).unwrap_err().is_validation());
    }

    #[test]
    fn test_barrier_cheaper_than_vanilla() {
        let model: DistributionModel = LogNormalModel::new(2.5, 0.4).unwrap().into();
        let vanilla = PlainVanilla::new(10.0, 1, model.clone()).unwrap().into();
        let barrier = Barrier::new(10.0, 20.0, 1, model).unwrap().into();
        let v = grid_eval(&vanilla, &settings()).unwrap();
        let b = grid_eval(&barrier, &settings()).unwrap();
        assert!(b < v);
        assert!(b > 0.0);
    }

    proptest! {
        #[test]
        fn prop_prices_non_negative(
            strike in 0.0_f64..60.0,
            location in 1.0_f64..20.0,
            scale in 0.5_f64..5.0,
            call in any::<bool>(),
        ) {
            let flag = if call { 1 } else { -1 };
            let model: DistributionModel = GammaModel::new(location, scale).unwrap().into();
            let payoff = PlainVanilla::new(strike, flag, model).unwrap().into();
            prop_assert!(grid_eval(&payoff, &settings()).unwrap() >= 0.0);
        }

        #[test]
        fn prop_digital_call_put_sum_to_mass(
            strike in 5.0_f64..50.0,
            location in 2.0_f64..15.0,
        ) {
            // Call and put indicator overlap only at x == strike.
            let model: DistributionModel = GammaModel::new(location, 2.0).unwrap().into();
            let call = Digital::new(strike, 1, model.clone()).unwrap().into();
            let put = Digital::new(strike, -1, model.clone()).unwrap().into();
            let all = Digital::new(0.0, 1, model).unwrap().into();
            let s = settings();
            let total = grid_eval(&all, &s).unwrap();
            let split = grid_eval(&call, &s).unwrap() + grid_eval(&put, &s).unwrap();
            prop_assert!(split >= total - 1e-12);
            prop_assert!(split - total < 0.5 * 0.5);
        }
    }
}
