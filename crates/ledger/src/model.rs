use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{FinancialAccount, RecordId};

/// Direction of a ledger fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Expense,
}

/// Settlement state of a record or installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Pending,
    Paid,
}

/// Billing-cycle state of a credit-card invoice record.
///
/// Only meaningful when `LedgerRecord::is_invoice` is set; absent on the wire
/// means the invoice is still accumulating (open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    Open,
    Closed,
}

/// Spending/earning category the backend assigns to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sales,
    Stock,
    Services,
    Rent,
    Payroll,
    Taxes,
    Utilities,
    Other,
}

impl Category {
    /// Categories allocated as fixed costs in the accrual P&L.
    pub fn is_fixed_cost(&self) -> bool {
        matches!(
            self,
            Category::Rent | Category::Payroll | Category::Taxes | Category::Utilities | Category::Other
        )
    }
}

/// One slice of an installment plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based position within the plan.
    pub number: u32,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
    pub status: SettlementStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
}

/// Canonical financial fact, as returned by the backend.
///
/// A record with a non-empty installment plan contributes to period views
/// only through its expanded children, never through its own `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecord {
    pub id: RecordId,
    pub description: String,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub status: SettlementStatus,
    pub category: Category,
    /// Creation instant; accrual reference when no due/payment date applies.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
    pub financial_account_id: FinancialAccount,
    /// Marks a credit-card invoice aggregate rather than a line-level expense.
    #[serde(default)]
    pub is_invoice: bool,
    #[serde(default)]
    pub invoice_status: Option<InvoiceState>,
    #[serde(default)]
    pub installments: Vec<Installment>,
}

impl LedgerRecord {
    /// An individual card purchase belonging to the card statement, not the
    /// cash flow.
    pub fn is_card_purchase_line(&self) -> bool {
        self.financial_account_id.is_card() && !self.is_invoice
    }

    /// Billing-cycle state with the wire default applied.
    pub fn effective_invoice_state(&self) -> InvoiceState {
        self.invoice_status.unwrap_or(InvoiceState::Open)
    }

    /// An invoice still accumulating charges; not yet a ledger fact for any
    /// period view.
    pub fn is_open_invoice(&self) -> bool {
        self.is_invoice
            && self.effective_invoice_state() == InvoiceState::Open
            && self.status != SettlementStatus::Paid
    }

    pub fn installment(&self, number: u32) -> Option<&Installment> {
        self.installments.iter().find(|i| i.number == number)
    }
}
