//! Method resolution and portfolio pricing.
//!
//! The dispatcher looks up the configured method for a deal's payoff type
//! and distribution, prices it (grid, or exact backend with grid fallback)
//! and records the price on the deal.

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, warn};

use pricer_core::math::GridSettings;
use pricer_core::types::PricingError;
use pricer_models::portfolio::{Deal, Portfolio};

use crate::exact::ExactBackend;
use crate::grid::GridPricer;
use crate::method::PricingMethod;

/// Source of configured method names.
pub trait MethodResolver: Send + Sync {
    /// Method name configured for `payoff_type` under `model`, if any.
    fn method_name(&self, payoff_type: &str, model: &str) -> Option<&str>;
}

/// Result of pricing one deal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Configured method
    pub method: PricingMethod,
    /// Whether an exact request was served by the grid
    pub fell_back: bool,
    /// Price
    pub price: f64,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fell_back {
            write!(f, "{} (grid fallback)", self.method)
        } else {
            write!(f, "{}", self.method)
        }
    }
}

/// Per-deal outcome of [`PriceDispatcher::price_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct DealOutcome {
    /// Position in the portfolio
    pub index: usize,
    /// Deal identifier
    pub deal_id: String,
    /// Quote or failure
    pub result: Result<Quote, PricingError>,
}

/// Routes deals to the configured pricing method.
///
/// # Examples
/// ```
/// use pricer_core::math::GridSettings;
/// use pricer_models::instruments::Digital;
/// use pricer_models::models::GammaModel;
/// use pricer_models::portfolio::Deal;
/// use pricer_pricing::{MethodResolver, PriceDispatcher, PricingMethod, UnavailableBackend};
///
/// struct AlwaysExact;
/// impl MethodResolver for AlwaysExact {
///     fn method_name(&self, _: &str, _: &str) -> Option<&str> {
///         Some("exact_eval")
///     }
/// }
///
/// let model = GammaModel::new(9.0, 3.0).unwrap().into();
/// let mut deal = Deal::new("D-1", "Digital", Digital::new(15.0, -1, model).unwrap().into());
///
/// let dispatcher = PriceDispatcher::new(&AlwaysExact, &UnavailableBackend);
/// let settings = GridSettings::new(1.0, 0.5, 100.0).unwrap();
/// let quote = dispatcher.price_deal(&mut deal, &settings).unwrap();
///
/// assert_eq!(quote.method, PricingMethod::Exact);
/// assert!(quote.fell_back);
/// assert_eq!(deal.price(), Some(quote.price));
/// ```
#[derive(Clone, Copy)]
pub struct PriceDispatcher<'a> {
    resolver: &'a dyn MethodResolver,
    exact: &'a dyn ExactBackend,
}

impl<'a> PriceDispatcher<'a> {
    /// Creates a dispatcher over a method resolver and an exact backend.
    pub fn new(resolver: &'a dyn MethodResolver, exact: &'a dyn ExactBackend) -> Self {
        Self { resolver, exact }
    }

    /// Resolves the configured method for `deal`.
    ///
    /// # Errors
    /// - `PricingError::MissingMethod` if nothing is configured
    /// - `PricingError::UnknownMethod` if the configured name is not known
    pub fn resolve(&self, deal: &Deal) -> Result<PricingMethod, PricingError> {
        let model = deal.payoff().model().name();
        let name = self
            .resolver
            .method_name(deal.type_tag(), model)
            .ok_or_else(|| PricingError::MissingMethod {
                payoff_type: deal.type_tag().to_string(),
                model: model.to_string(),
            })?;
        name.parse()
    }

    /// Prices `deal` without recording the price.
    pub fn quote(&self, deal: &Deal, settings: &GridSettings) -> Result<Quote, PricingError> {
        let method = self.resolve(deal)?;
        let payoff = deal.payoff();
        match method {
            PricingMethod::Exact if self.exact.supports(payoff) => Ok(Quote {
                method,
                fell_back: false,
                price: self.exact.price(payoff)?,
            }),
            PricingMethod::Exact => {
                debug!(
                    deal_id = deal.id(),
                    backend = self.exact.name(),
                    "Exact evaluation unavailable, using grid"
                );
                Ok(Quote {
                    method,
                    fell_back: true,
                    price: GridPricer::new(*settings)?.price(payoff)?,
                })
            }
            PricingMethod::Grid => Ok(Quote {
                method,
                fell_back: false,
                price: GridPricer::new(*settings)?.price(payoff)?,
            }),
        }
    }

    /// Prices `deal` and records the price on it.
    ///
    /// # Errors
    /// Resolution and evaluation errors from [`quote`](Self::quote), or
    /// `PricingError::AlreadyPriced` if the deal already has a price.
    pub fn price_deal(&self, deal: &mut Deal, settings: &GridSettings) -> Result<Quote, PricingError> {
        if deal.is_priced() {
            return Err(PricingError::AlreadyPriced(deal.id().to_string()));
        }
        let quote = self.quote(deal, settings)?;
        deal.record_price(quote.price)?;
        Ok(quote)
    }

    /// Prices every deal of `portfolio`.
    ///
    /// Quotes are computed sequentially, or on the rayon pool when `parallel`
    /// is set; either way prices are recorded and outcomes returned in
    /// portfolio order. A failing deal does not stop the others.
    pub fn price_all(
        &self,
        portfolio: &mut Portfolio,
        settings: &GridSettings,
        parallel: bool,
    ) -> Vec<DealOutcome> {
        let quotes: Vec<Result<Quote, PricingError>> = if parallel {
            portfolio
                .deals()
                .par_iter()
                .map(|deal| self.quote_unpriced(deal, settings))
                .collect()
        } else {
            portfolio
                .iter()
                .map(|deal| self.quote_unpriced(deal, settings))
                .collect()
        };

        portfolio
            .iter_mut()
            .zip(quotes)
            .enumerate()
            .map(|(index, (deal, quote))| {
                let result = quote.and_then(|q| deal.record_price(q.price).map(|_| q));
                if let Err(err) = &result {
                    warn!(deal_id = deal.id(), error = %err, "Deal pricing failed");
                }
                DealOutcome {
                    index,
                    deal_id: deal.id().to_string(),
                    result,
                }
            })
            .collect()
    }

    fn quote_unpriced(&self, deal: &Deal, settings: &GridSettings) -> Result<Quote, PricingError> {
        if deal.is_priced() {
            return Err(PricingError::AlreadyPriced(deal.id().to_string()));
        }
        self.quote(deal, settings)
    }
}

impl fmt::Debug for PriceDispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceDispatcher")
            .field("exact", &self.exact.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{ClosedFormBackend, UnavailableBackend};
    use approx::assert_relative_eq;
    use pricer_models::instruments::{Digital, PlainVanilla};
    use pricer_models::models::{DistributionModel, GammaModel, UniformModel};
    use std::collections::HashMap;

    struct Table(HashMap<(String, String), String>);

    impl Table {
        fn new(entries: &[(&str, &str, &str)]) -> Self {
            Table(
                entries
                    .iter()
                    .map(|(t, m, method)| ((t.to_string(), m.to_string()), method.to_string()))
                    .collect(),
            )
        }
    }

    impl MethodResolver for Table {
        fn method_name(&self, payoff_type: &str, model: &str) -> Option<&str> {
            self.0
                .get(&(payoff_type.to_string(), model.to_string()))
                .map(String::as_str)
        }
    }

    fn settings() -> GridSettings {
        GridSettings::new(1.0, 0.5, 100.0).unwrap()
    }

    fn gamma() -> DistributionModel {
        GammaModel::new(9.0, 3.0).unwrap().into()
    }

    fn digital_put() -> Deal {
        Deal::new("DG", "Digital", Digital::new(15.0, -1, gamma()).unwrap().into())
    }

    #[test]
    fn test_grid_method() {
        let table = Table::new(&[("PlainVanilla", "Uniform", "grid_eval")]);
        let model = UniformModel::new(10.0, 3.0).unwrap().into();
        let mut deal = Deal::new("PV", "PlainVanilla", PlainVanilla::new(10.0, 1, model).unwrap().into());

        let dispatcher = PriceDispatcher::new(&table, &UnavailableBackend);
        let quote = dispatcher.price_deal(&mut deal, &settings()).unwrap();
        assert_eq!(quote.method, PricingMethod::Grid);
        assert!(!quote.fell_back);
        assert_relative_eq!(deal.price().unwrap(), 0.875, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_fallback_equals_grid() {
        let exact = Table::new(&[("Digital", "Gamma", "exact_eval")]);
        let grid = Table::new(&[("Digital", "Gamma", "grid_eval")]);

        let mut a = digital_put();
        let mut b = digital_put();
        let qa = PriceDispatcher::new(&exact, &UnavailableBackend)
            .price_deal(&mut a, &settings())
            .unwrap();
        let qb = PriceDispatcher::new(&grid, &UnavailableBackend)
            .price_deal(&mut b, &settings())
            .unwrap();
        assert!(qa.fell_back);
        assert_eq!(qa.price, qb.price);
    }

    #[test]
    fn test_exact_with_closed_form() {
        let table = Table::new(&[("Digital", "Gamma", "exact_eval")]);
        let mut deal = digital_put();
        let quote = PriceDispatcher::new(&table, &ClosedFormBackend)
            .price_deal(&mut deal, &settings())
            .unwrap();
        assert!(!quote.fell_back);
        assert_relative_eq!(quote.price, gamma().cdf(15.0).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn test_missing_and_unknown_methods() {
        let missing = Table::new(&[]);
        let mut deal = digital_put();
        let err = PriceDispatcher::new(&missing, &UnavailableBackend)
            .price_deal(&mut deal, &settings())
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::MissingMethod {
                payoff_type: "Digital".to_string(),
                model: "Gamma".to_string(),
            }
        );

        let unknown = Table::new(&[("Digital", "Gamma", "monte_carlo")]);
        let err = PriceDispatcher::new(&unknown, &UnavailableBackend)
            .price_deal(&mut deal, &settings())
            .unwrap_err();
        assert_eq!(err, PricingError::UnknownMethod("monte_carlo".to_string()));
        assert!(!deal.is_priced());
    }

    #[test]
    fn test_price_deal_twice_fails() {
        let table = Table::new(&[("Digital", "Gamma", "grid_eval")]);
        let dispatcher = PriceDispatcher::new(&table, &UnavailableBackend);
        let mut deal = digital_put();
        let first = dispatcher.price_deal(&mut deal, &settings()).unwrap();
        assert!(matches!(
            dispatcher.price_deal(&mut deal, &settings()),
            Err(PricingError::AlreadyPriced(_))
        ));
        assert_eq!(deal.price(), Some(first.price));
    }

    #[test]
    fn test_price_all_contains_failures_and_keeps_order() {
        let table = Table::new(&[("Digital", "Gamma", "grid_eval")]);
        let dispatcher = PriceDispatcher::new(&table, &UnavailableBackend);
        let uniform: DistributionModel = UniformModel::new(10.0, 3.0).unwrap().into();

        for parallel in [false, true] {
            let mut portfolio: Portfolio = vec![
                digital_put(),
                Deal::new("PV", "PlainVanilla", PlainVanilla::new(10.0, 1, uniform.clone()).unwrap().into()),
                digital_put(),
            ]
            .into_iter()
            .collect();

            let outcomes = dispatcher.price_all(&mut portfolio, &settings(), parallel);
            let ids: Vec<&str> = outcomes.iter().map(|o| o.deal_id.as_str()).collect();
            assert_eq!(ids, vec!["DG", "PV", "DG"]);
            assert!(outcomes[0].result.is_ok());
            assert!(matches!(
                outcomes[1].result,
                Err(PricingError::MissingMethod { .. })
            ));
            assert_eq!(outcomes[2].index, 2);
            assert_eq!(portfolio.priced_count(), 2);
            assert_eq!(portfolio.get(0).unwrap().price(), portfolio.get(2).unwrap().price());
        }
    }
}
