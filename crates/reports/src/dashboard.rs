//! The dashboard snapshot: every KPI of a competency in one pass.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{Competency, KpiGoals};
use lojista_inventory::{
    MarginSummary, ProductKpi, StockHistogram, best_sellers, margin_summary, slowest_movers,
    stock_histogram,
};
use lojista_ledger::{
    CashFlowSummary, LedgerRecord, LedgerView, aggregate_cash_flow, classify,
};
use lojista_products::Product;
use lojista_sales::{Sale, sold_quantities};

use crate::accrual::{AccrualSummary, aggregate_accrual};

/// Entries per ranking list on the dashboard.
const TOP_N: usize = 5;

/// Everything the dashboard shows for one competency.
///
/// Built from the current snapshot arrays only; building it twice from the
/// same snapshot yields the same value, so it is safe to rebuild on every
/// refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub period: Competency,
    pub cash_flow: CashFlowSummary,
    pub accrual: AccrualSummary,
    pub product_kpis: Vec<ProductKpi>,
    pub margins: MarginSummary,
    pub histogram: StockHistogram,
    pub best_sellers: Vec<ProductKpi>,
    pub slowest_movers: Vec<ProductKpi>,
}

impl DashboardSnapshot {
    pub fn build(
        records: &[LedgerRecord],
        sales: &[Sale],
        products: &[Product],
        goals: &KpiGoals,
        period: Competency,
        today: DateTime<Utc>,
    ) -> Self {
        let entries = classify(records, period, LedgerView::CashFlow, today);
        let cash_flow = aggregate_cash_flow(&entries);
        let accrual = aggregate_accrual(sales, &entries, period, goals, today);

        let window_start = today - Duration::days(i64::from(goals.turnover_window.days()));
        let sold = sold_quantities(sales, window_start);
        let product_kpis = lojista_inventory::assess(products, &sold, goals);

        let margins = margin_summary(&product_kpis);
        let histogram = stock_histogram(&product_kpis);
        let best = best_sellers(&product_kpis, TOP_N);
        let slowest = slowest_movers(&product_kpis, TOP_N);

        Self {
            period,
            cash_flow,
            accrual,
            product_kpis,
            margins,
            histogram,
            best_sellers: best,
            slowest_movers: slowest,
        }
    }
}
