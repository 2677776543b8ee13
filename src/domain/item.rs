use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An element of the decoded payload before validation.
///
/// Untrusted: may be any JSON value at all, so it stays weakly typed until
/// [`ValidatedItem::from_candidate`] promotes it.
pub type CandidateItem = Value;

/// A line item that survived the structural filter.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedItem {
    pub name: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl ValidatedItem {
    /// Keys a candidate must carry to be considered at all.
    const REQUIRED_KEYS: [&'static str; 3] = ["name", "quantity", "price"];

    /// Promotes a candidate into a typed item.
    ///
    /// Two stages: the candidate must be an object carrying `name`,
    /// `quantity` and `price`, and those values must deserialize into the
    /// typed fields. Non-numeric quantities or prices are rejected here.
    /// Returns `None` for anything else; callers filter, they do not fail.
    pub fn from_candidate(candidate: &CandidateItem) -> Option<Self> {
        let fields = candidate.as_object()?;
        if !Self::REQUIRED_KEYS.iter().all(|key| fields.contains_key(*key)) {
            return None;
        }
        match serde_json::from_value(candidate.clone()) {
            Ok(item) => Some(item),
            Err(reason) => {
                log::trace!("discarding order item: {reason}");
                None
            }
        }
    }

    /// The amount to display for this line: price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * self.quantity
    }
}
