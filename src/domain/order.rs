use super::item::ValidatedItem;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// A validated order ready for display.
///
/// `total_amount` is derived from `items` in [`NormalizedOrder::from_items`]
/// and nowhere else; it is never taken from the input payload.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOrder {
    pub items: Vec<ValidatedItem>,
    pub total_amount: Decimal,
}

impl NormalizedOrder {
    /// The canonical empty result returned on any normalization failure or
    /// reset. An order with zero valid items is indistinguishable from a
    /// total parse failure.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    /// Builds an order from filtered items, computing the total as the sum
    /// of line totals rounded to 2 decimal places (half away from zero).
    pub fn from_items(items: Vec<ValidatedItem>) -> Self {
        let total_amount = items
            .iter()
            .map(ValidatedItem::line_total)
            .sum::<Decimal>()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            items,
            total_amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NormalizedOrder {
    fn default() -> Self {
        Self::empty()
    }
}
