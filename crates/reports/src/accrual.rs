//! Accrual profit & loss for a competency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{Competency, KpiGoals};
use lojista_ledger::{Category, EffectiveEntry, SettlementStatus};
use lojista_sales::{Sale, sales_in_period};

/// Accrual view of a competency.
///
/// Monetary fields are in smallest currency unit (cents); percentages are
/// plain percent values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualSummary {
    /// Sales recognized at transaction time, settlement-independent.
    pub revenue: i64,
    /// Cost of the goods actually sold in the period, never of stock merely
    /// purchased.
    pub cogs: i64,
    /// Paid service-category entries in the period.
    pub service_cost: i64,
    pub total_variable_costs: i64,
    /// Paid fixed-category entries in the period.
    pub fixed_costs: i64,
    pub contribution_margin_pct: f64,
    pub net_profit: i64,
    /// Revenue needed to cover fixed costs at the predicted margin.
    pub break_even: i64,
    /// Break-even plus the configured net profit target.
    pub revenue_goal: i64,
    pub progress_pct: f64,
    /// Month-end revenue projected from the pace so far; 0 before the first
    /// elapsed day.
    pub forecast: i64,
}

/// Aggregate the accrual P&L of `period`.
///
/// `entries` is the period's classified cash-flow view: fixed and service
/// costs come from it, revenue and COGS come from `sales` alone.
pub fn aggregate_accrual(
    sales: &[Sale],
    entries: &[EffectiveEntry],
    period: Competency,
    goals: &KpiGoals,
    today: DateTime<Utc>,
) -> AccrualSummary {
    let period_sales = sales_in_period(sales, period);
    let revenue: i64 = period_sales.iter().map(|s| s.total()).sum();
    let cogs: i64 = period_sales.iter().map(|s| s.cost()).sum();

    let service_cost: i64 = entries
        .iter()
        .filter(|e| e.category == Category::Services && e.status == SettlementStatus::Paid)
        .map(|e| e.amount)
        .sum();
    let fixed_costs: i64 = entries
        .iter()
        .filter(|e| e.category.is_fixed_cost() && e.status == SettlementStatus::Paid)
        .map(|e| e.amount)
        .sum();

    let total_variable_costs = cogs + service_cost;
    let contribution_margin_pct = if revenue > 0 {
        (revenue - total_variable_costs) as f64 / revenue as f64 * 100.0
    } else {
        0.0
    };
    let net_profit = revenue - total_variable_costs - fixed_costs;

    let predicted_margin_ratio = goals.predicted_avg_margin / 100.0;
    let break_even = if predicted_margin_ratio > 0.0 {
        (fixed_costs as f64 / predicted_margin_ratio).round() as i64
    } else {
        0
    };
    let revenue_goal = break_even + goals.net_profit_goal;
    let progress_pct = if revenue_goal > 0 {
        revenue as f64 / revenue_goal as f64 * 100.0
    } else {
        0.0
    };

    let days_elapsed = period.days_elapsed(today);
    let forecast = if days_elapsed > 0 {
        (revenue as f64 / days_elapsed as f64 * period.days_in_month() as f64).round() as i64
    } else {
        0
    };

    AccrualSummary {
        revenue,
        cogs,
        service_cost,
        total_variable_costs,
        fixed_costs,
        contribution_margin_pct,
        net_profit,
        break_even,
        revenue_goal,
        progress_pct,
        forecast,
    }
}
