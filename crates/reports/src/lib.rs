//! `lojista-reports` — period-scoped financial summaries.
//!
//! Two deliberately divergent views of the same month: the accrual P&L
//! recognizes revenue and cost at transaction time, while the cash flow in
//! `lojista-ledger` counts only settled movement. Both are exposed side by
//! side; the dashboard snapshot composes them with the inventory KPIs.

pub mod accrual;
pub mod dashboard;

pub use accrual::{AccrualSummary, aggregate_accrual};
pub use dashboard::DashboardSnapshot;
