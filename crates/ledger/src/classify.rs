//! Record classification: expanding raw records into effective ledger
//! entries for one view and one competency.
//!
//! Classification is view-specific, never a single global partition: a record
//! excluded from the cash flow can still legitimately appear in the card
//! statement or the invoice lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{Competency, FinancialAccount, RecordId};

use crate::model::{Category, LedgerRecord, RecordType, SettlementStatus};

/// Target view a classification pass produces entries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerView {
    /// Settled/pending cash movement; excludes card purchase lines and open
    /// invoices.
    CashFlow,
    /// Individual card purchase lines, the constituents of an invoice cycle.
    CardStatement,
}

/// One displayable, summable ledger fact after expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveEntry {
    /// The record this entry was derived from.
    pub record_id: RecordId,
    pub description: String,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
    pub record_type: RecordType,
    pub status: SettlementStatus,
    pub category: Category,
    pub financial_account_id: FinancialAccount,
    /// Payment date preferred over due date preferred over creation instant.
    pub reference_date: DateTime<Utc>,
    /// Set when the entry came from an installment plan (1-based).
    pub installment_number: Option<u32>,
}

/// Expand `records` into the effective entries of `view` for `period`.
///
/// `now` substitutes for a missing due/payment date on an installment, so the
/// caller controls the clock. Entries come back sorted descending by
/// reference date (presentation order; aggregation does not depend on it).
pub fn classify(
    records: &[LedgerRecord],
    period: Competency,
    view: LedgerView,
    now: DateTime<Utc>,
) -> Vec<EffectiveEntry> {
    let mut entries = Vec::new();

    for record in records {
        match view {
            LedgerView::CashFlow => {
                if record.is_card_purchase_line() {
                    continue;
                }
                if record.is_open_invoice() {
                    continue;
                }
            }
            LedgerView::CardStatement => {
                if !record.is_card_purchase_line() {
                    continue;
                }
            }
        }

        if record.installments.is_empty() {
            let reference_date = single_reference_date(record);
            if !period.contains(reference_date) {
                continue;
            }
            entries.push(EffectiveEntry {
                record_id: record.id,
                description: record.description.clone(),
                amount: record.amount,
                record_type: record.record_type,
                status: record.status,
                category: record.category,
                financial_account_id: record.financial_account_id,
                reference_date,
                installment_number: None,
            });
        } else {
            // The parent's own amount is never emitted; only its children.
            let total = record.installments.len();
            for installment in &record.installments {
                let reference_date = installment
                    .payment_date
                    .or(installment.due_date)
                    .unwrap_or(now);
                if !period.contains(reference_date) {
                    continue;
                }
                entries.push(EffectiveEntry {
                    record_id: record.id,
                    description: format!(
                        "{} ({}/{})",
                        record.description, installment.number, total
                    ),
                    amount: installment.amount,
                    record_type: record.record_type,
                    status: installment.status,
                    category: record.category,
                    financial_account_id: record.financial_account_id,
                    reference_date,
                    installment_number: Some(installment.number),
                });
            }
        }
    }

    entries.sort_by(|a, b| b.reference_date.cmp(&a.reference_date));
    entries
}

fn single_reference_date(record: &LedgerRecord) -> DateTime<Utc> {
    match (record.status, record.payment_date) {
        (SettlementStatus::Paid, Some(paid_at)) => paid_at,
        _ => record.due_date.unwrap_or(record.timestamp),
    }
}
