use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from product id to total charge.
///
/// Iteration order carries no meaning; only the final value per id does.
pub type ChargeMap = HashMap<String, f64>;

/// A priced product record.
///
/// Values are accepted as given: negative, zero and non-finite prices are
/// all valid inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub base_price: f64,
    pub tax: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, base_price: f64, tax: f64) -> Self {
        Self {
            id: id.into(),
            base_price,
            tax,
        }
    }

    /// Total charge for this product: base price plus tax.
    pub fn total_charge(&self) -> f64 {
        self.base_price + self.tax
    }
}
