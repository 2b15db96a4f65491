use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{Competency, FinancialAccount, ProductId, SaleId};

/// One line of a completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price in smallest currency unit (cents).
    pub unit_price: i64,
    /// Unit cost at sale time, cents. Fixes COGS to what was actually sold.
    pub unit_cost: i64,
}

impl SaleItem {
    pub fn total(&self) -> i64 {
        self.unit_price * self.quantity
    }

    pub fn cost(&self) -> i64 {
        self.unit_cost * self.quantity
    }
}

/// A completed point-of-sale sale, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub sold_at: DateTime<Utc>,
    pub payment_account: FinancialAccount,
    pub items: Vec<SaleItem>,
}

impl Sale {
    /// Sale total in cents.
    pub fn total(&self) -> i64 {
        self.items.iter().map(SaleItem::total).sum()
    }

    /// Cost of the goods sold in this sale, cents.
    pub fn cost(&self) -> i64 {
        self.items.iter().map(SaleItem::cost).sum()
    }
}

/// Sales whose transaction instant falls in `period`.
pub fn sales_in_period<'a>(sales: &'a [Sale], period: Competency) -> Vec<&'a Sale> {
    sales.iter().filter(|s| period.contains(s.sold_at)).collect()
}

/// Quantity sold per product since `since` (the turnover look-back window).
pub fn sold_quantities(sales: &[Sale], since: DateTime<Utc>) -> HashMap<ProductId, i64> {
    let mut sold: HashMap<ProductId, i64> = HashMap::new();
    for sale in sales {
        if sale.sold_at < since {
            continue;
        }
        for item in &sale.items {
            *sold.entry(item.product_id).or_insert(0) += item.quantity;
        }
    }
    sold
}
