//! Deal: a payoff with its external identifier and type tag.

use std::fmt;

use pricer_core::types::PricingError;

use crate::instruments::Payoff;

/// Priceable deal.
///
/// Created during ingestion, priced exactly once.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PlainVanilla;
/// use pricer_models::models::UniformModel;
/// use pricer_models::portfolio::Deal;
///
/// let model = UniformModel::new(10.0, 3.0).unwrap().into();
/// let payoff = PlainVanilla::new(10.0, 1, model).unwrap().into();
/// let mut deal = Deal::new("D-001", "PlainVanilla", payoff);
///
/// assert_eq!(deal.price(), None);
/// deal.record_price(0.875).unwrap();
/// assert_eq!(deal.price(), Some(0.875));
/// assert!(deal.record_price(1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    id: String,
    type_tag: String,
    payoff: Payoff,
    price: Option<f64>,
}

impl Deal {
    /// Creates an unpriced deal.
    pub fn new(id: impl Into<String>, type_tag: impl Into<String>, payoff: Payoff) -> Self {
        Self {
            id: id.into(),
            type_tag: type_tag.into(),
            payoff,
            price: None,
        }
    }

    /// External identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Payoff type name used for pricing-configuration lookup.
    #[inline]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The payoff, including its distribution model.
    #[inline]
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Price, once computed.
    #[inline]
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Whether a price has been recorded.
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.price.is_some()
    }

    /// Records the price.
    ///
    /// # Errors
    /// `PricingError::AlreadyPriced` if the deal already carries a price.
    pub fn record_price(&mut self, price: f64) -> Result<(), PricingError> {
        if self.price.is_some() {
            return Err(PricingError::AlreadyPriced(self.id.clone()));
        }
        self.price = Some(price);
        Ok(())
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.payoff)?;
        if let Some(price) = self.price {
            write!(f, "\nPrice = {}", price)?;
        }
        Ok(())
    }
}
