//! Report aggregation
//!
//! Read-only queries over the transaction log and catalog, consumed by the
//! dashboard and reporting surfaces. Pure functions over slices; callers
//! fetch the collections from the store.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{PaymentType, Product, Transaction};

/// Overall sales figures
#[derive(Debug, Clone, Serialize)]
pub struct SalesSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub transaction_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_transaction: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_sales: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gcash_sales: Decimal,
}

/// Per-product sales ranking entry
#[derive(Debug, Clone, Serialize)]
pub struct TopProduct {
    pub product: Product,
    pub total_sold: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Revenue totals split by payment method
pub fn sales_summary(transactions: &[Transaction]) -> SalesSummary {
    let total_revenue: Decimal = transactions.iter().map(|t| t.total).sum();
    let by_payment = |payment: PaymentType| -> Decimal {
        transactions
            .iter()
            .filter(|t| t.payment_type == payment)
            .map(|t| t.total)
            .sum()
    };
    let count = transactions.len();
    let average_transaction = if count == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(count as u64)
    };

    SalesSummary {
        total_revenue,
        transaction_count: count,
        average_transaction,
        cash_sales: by_payment(PaymentType::Cash),
        gcash_sales: by_payment(PaymentType::Gcash),
    }
}

/// Best sellers by units sold, descending, truncated to `limit`.
///
/// Grouped by product id; the product snapshot shown is the first one seen
/// in the log. Ties keep first-sold order.
pub fn top_products(transactions: &[Transaction], limit: usize) -> Vec<TopProduct> {
    let mut order: Vec<String> = Vec::new();
    let mut sales: HashMap<String, TopProduct> = HashMap::new();

    for transaction in transactions {
        for item in &transaction.items {
            let entry = sales
                .entry(item.product.id.clone())
                .or_insert_with(|| {
                    order.push(item.product.id.clone());
                    TopProduct {
                        product: item.product.clone(),
                        total_sold: 0,
                        revenue: Decimal::ZERO,
                    }
                });
            entry.total_sold += item.quantity;
            entry.revenue += item.line_total();
        }
    }

    let mut ranked: Vec<TopProduct> = order
        .iter()
        .filter_map(|id| sales.remove(id))
        .collect();
    // stable sort keeps first-sold order for ties
    ranked.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
    ranked.truncate(limit);
    ranked
}

/// Revenue for a single calendar day (UTC date of the recorded timestamp).
/// Transactions with unparsable dates are excluded.
pub fn sales_for_day(transactions: &[Transaction], day: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| {
            DateTime::parse_from_rfc3339(&t.date)
                .map(|d| d.date_naive() == day)
                .unwrap_or(false)
        })
        .map(|t| t.total)
        .sum()
}

/// Last `limit` transactions, newest first
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(limit).collect()
}

/// Total retail value of stock on hand
pub fn inventory_value(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.price * Decimal::from(p.stock))
        .sum()
}
