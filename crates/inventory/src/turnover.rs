//! Turnover and margin estimation over a sales look-back window.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lojista_core::{KpiGoals, ProductId};
use lojista_products::{Product, real_margin_pct};

/// Supply-risk classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Stockout,
    #[serde(rename = "at-risk")]
    AtRisk,
    Safe,
    Excess,
}

/// Derived per-product figures for one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKpi {
    pub product_id: ProductId,
    pub name: String,
    pub stock: i64,
    /// Quantity sold inside the look-back window.
    pub sold_qty: i64,
    pub daily_rate: f64,
    /// Estimated days until stock depletes; `f64::INFINITY` when nothing
    /// sold but stock remains.
    pub days_of_supply: f64,
    /// How many times the window turns the stock over; 0 when supply is
    /// zero or infinite.
    pub turnover_ratio: f64,
    pub real_margin_pct: f64,
    pub status: StockStatus,
}

/// Compute per-product KPIs from the catalog, the sold-quantity map of the
/// look-back window, and the configured thresholds.
pub fn assess(
    products: &[Product],
    sold: &HashMap<ProductId, i64>,
    goals: &KpiGoals,
) -> Vec<ProductKpi> {
    let window_days = goals.turnover_window.days() as f64;

    products
        .iter()
        .map(|product| {
            let sold_qty = sold.get(&product.id).copied().unwrap_or(0);
            let daily_rate = sold_qty as f64 / window_days;
            let days_of_supply = if daily_rate > 0.0 {
                product.stock as f64 / daily_rate
            } else if product.stock > 0 {
                f64::INFINITY
            } else {
                0.0
            };
            let turnover_ratio = if days_of_supply > 0.0 && days_of_supply.is_finite() {
                window_days / days_of_supply
            } else {
                0.0
            };

            ProductKpi {
                product_id: product.id,
                name: product.name.clone(),
                stock: product.stock,
                sold_qty,
                daily_rate,
                days_of_supply,
                turnover_ratio,
                real_margin_pct: real_margin_pct(product, goals),
                status: classify_supply(product.stock, days_of_supply, goals),
            }
        })
        .collect()
}

/// First match wins; boundaries are inclusive on the lower comparison.
fn classify_supply(stock: i64, days_of_supply: f64, goals: &KpiGoals) -> StockStatus {
    if stock <= 0 {
        StockStatus::Stockout
    } else if days_of_supply == f64::INFINITY {
        StockStatus::Excess
    } else if days_of_supply <= goals.risk_min_days {
        StockStatus::Stockout
    } else if days_of_supply <= goals.risk_max_days {
        StockStatus::AtRisk
    } else if days_of_supply <= goals.safety_max_days {
        StockStatus::Safe
    } else {
        StockStatus::Excess
    }
}

/// Average margin over active products and over the whole catalog.
///
/// "Active" excludes excess stock: the margin of what the shop actually
/// sells, versus the margin of everything it stocks. Both are exposed,
/// never collapsed into one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSummary {
    pub active_avg_pct: f64,
    pub overall_avg_pct: f64,
}

pub fn margin_summary(kpis: &[ProductKpi]) -> MarginSummary {
    MarginSummary {
        active_avg_pct: average(
            kpis.iter()
                .filter(|k| k.status != StockStatus::Excess)
                .map(|k| k.real_margin_pct),
        ),
        overall_avg_pct: average(kpis.iter().map(|k| k.real_margin_pct)),
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Product count per supply status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistogram {
    pub stockout: usize,
    pub at_risk: usize,
    pub safe: usize,
    pub excess: usize,
}

pub fn stock_histogram(kpis: &[ProductKpi]) -> StockHistogram {
    let mut histogram = StockHistogram::default();
    for kpi in kpis {
        match kpi.status {
            StockStatus::Stockout => histogram.stockout += 1,
            StockStatus::AtRisk => histogram.at_risk += 1,
            StockStatus::Safe => histogram.safe += 1,
            StockStatus::Excess => histogram.excess += 1,
        }
    }
    histogram
}
