//! Deals and the portfolio that owns them.
//!
//! A [`Portfolio`] is an ordered sequence of [`Deal`]s: insertion order is
//! ingestion order, preserved through pricing, with no deduplication.

mod deal;

pub use deal::Deal;

/// Ordered collection of deals.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PlainVanilla;
/// use pricer_models::models::GammaModel;
/// use pricer_models::portfolio::{Deal, Portfolio};
///
/// let model = GammaModel::new(9.0, 3.0).unwrap();
/// let mut portfolio = Portfolio::new();
/// for id in ["A", "B", "A"] {
///     let payoff = PlainVanilla::new(15.0, -1, model.clone().into()).unwrap().into();
///     portfolio.push(Deal::new(id, "PlainVanilla", payoff));
/// }
/// let ids: Vec<&str> = portfolio.iter().map(|d| d.id()).collect();
/// assert_eq!(ids, vec!["A", "B", "A"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    deals: Vec<Deal>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a deal.
    #[inline]
    pub fn push(&mut self, deal: Deal) {
        self.deals.push(deal);
    }

    /// Number of deals.
    #[inline]
    pub fn len(&self) -> usize {
        self.deals.len()
    }

    /// Whether the portfolio holds no deals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Deals in insertion order.
    #[inline]
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Iterator over deals in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Deal> {
        self.deals.iter()
    }

    /// Mutable iterator over deals in insertion order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Deal> {
        self.deals.iter_mut()
    }

    /// Deal at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Deal> {
        self.deals.get(index)
    }

    /// Number of deals carrying a price.
    pub fn priced_count(&self) -> usize {
        self.deals.iter().filter(|d| d.is_priced()).count()
    }
}

impl FromIterator<Deal> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Deal>>(iter: I) -> Self {
        Self {
            deals: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Portfolio {
    type Item = Deal;
    type IntoIter = std::vec::IntoIter<Deal>;

    fn into_iter(self) -> Self::IntoIter {
        self.deals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Deal;
    type IntoIter = std::slice::Iter<'a, Deal>;

    fn into_iter(self) -> Self::IntoIter {
        self.deals.iter()
    }
}
