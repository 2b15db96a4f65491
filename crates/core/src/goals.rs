//! KPI goals: the configuration aggregate parameterizing derived computations.
//!
//! Treated as an immutable snapshot per aggregation pass; it only changes
//! through an explicit save round-trip to the backend.

use serde::{Deserialize, Serialize};

use crate::account::FinancialAccount;

/// Percent fee charged per settlement rail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    pub cash_box: f64,
    pub bank_main: f64,
    pub credit_main: f64,
    pub boleto: f64,
}

impl FeeSchedule {
    pub fn for_account(&self, account: FinancialAccount) -> f64 {
        match account {
            FinancialAccount::CashBox => self.cash_box,
            FinancialAccount::BankMain => self.bank_main,
            FinancialAccount::CreditMain => self.credit_main,
            FinancialAccount::Boleto => self.boleto,
        }
    }

    /// The card fee rate the real-margin formula charges against every sale.
    pub fn max_card_fee(&self) -> f64 {
        self.credit_main
    }
}

/// Look-back window for the turnover estimation, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum TurnoverWindow {
    #[default]
    D30,
    D60,
    D90,
    D180,
    D365,
}

impl TurnoverWindow {
    pub fn days(&self) -> u32 {
        match self {
            TurnoverWindow::D30 => 30,
            TurnoverWindow::D60 => 60,
            TurnoverWindow::D90 => 90,
            TurnoverWindow::D180 => 180,
            TurnoverWindow::D365 => 365,
        }
    }
}

impl TryFrom<u32> for TurnoverWindow {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(TurnoverWindow::D30),
            60 => Ok(TurnoverWindow::D60),
            90 => Ok(TurnoverWindow::D90),
            180 => Ok(TurnoverWindow::D180),
            365 => Ok(TurnoverWindow::D365),
            other => Err(format!("unsupported turnover window: {other} days")),
        }
    }
}

impl From<TurnoverWindow> for u32 {
    fn from(window: TurnoverWindow) -> Self {
        window.days()
    }
}

/// Business targets and thresholds configured by the shop owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiGoals {
    /// Tax charged on every sale, percent of price.
    pub tax_rate: f64,
    pub fees: FeeSchedule,
    /// Days of supply at or below which a product counts as (near) stockout.
    pub risk_min_days: f64,
    /// Days of supply at or below which a product is at risk.
    pub risk_max_days: f64,
    /// Days of supply at or below which a product is safe; above is excess.
    pub safety_max_days: f64,
    pub turnover_window: TurnoverWindow,
    /// Margin the owner expects on average, percent. Drives break-even.
    pub predicted_avg_margin: f64,
    /// Target net operating profit in smallest currency unit (cents).
    pub net_profit_goal: i64,
}

impl Default for KpiGoals {
    fn default() -> Self {
        Self {
            tax_rate: 0.0,
            fees: FeeSchedule::default(),
            risk_min_days: 5.0,
            risk_max_days: 15.0,
            safety_max_days: 30.0,
            turnover_window: TurnoverWindow::D30,
            predicted_avg_margin: 0.0,
            net_profit_goal: 0,
        }
    }
}
