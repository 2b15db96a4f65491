//! Settled cash movement for a period.

use serde::{Deserialize, Serialize};

use crate::classify::EffectiveEntry;
use crate::model::{RecordType, SettlementStatus};

/// Realized cash flow of a competency.
///
/// The period always opens at zero; realized balance is not carried forward
/// from prior periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    /// Settled income in smallest currency unit (cents).
    pub inflow: i64,
    /// Settled expenses in smallest currency unit (cents).
    pub outflow: i64,
    /// `inflow - outflow`, cents.
    pub balance: i64,
}

/// Sum the settled entries of a classified period.
///
/// Pending entries contribute nothing: this view reflects true liquidity,
/// not accrual.
pub fn aggregate_cash_flow(entries: &[EffectiveEntry]) -> CashFlowSummary {
    let mut inflow: i64 = 0;
    let mut outflow: i64 = 0;

    for entry in entries {
        if entry.status != SettlementStatus::Paid {
            continue;
        }
        match entry.record_type {
            RecordType::Income => inflow += entry.amount,
            RecordType::Expense => outflow += entry.amount,
        }
    }

    CashFlowSummary {
        inflow,
        outflow,
        balance: inflow - outflow,
    }
}
