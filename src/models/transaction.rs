//! Transaction Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Cash,
    Gcash,
}

/// Cart line item
///
/// In-memory while the sale is open; a deep product snapshot is embedded in
/// the transaction at checkout, immune to later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Immutable sale record
///
/// `total` is fixed at checkout time and never recomputed from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// RFC 3339 timestamp of the sale
    pub date: String,
    pub items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_type: PaymentType,
    pub cashier_name: String,
}
