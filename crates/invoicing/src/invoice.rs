use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{DomainError, DomainResult, RecordId};
use lojista_ledger::{InvoiceState, LedgerRecord, SettlementStatus};

/// Where a credit-card invoice sits in its billing cycle.
///
/// Accumulating invoices appear in no settlement list; payable ones show up
/// with their lateness; paid ones move to history and stay revertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum InvoicePhase {
    Accumulating,
    Payable { late: bool },
    Paid,
}

/// Lifecycle phase of `record`, or `None` for non-invoice records.
pub fn phase(record: &LedgerRecord, today: DateTime<Utc>) -> Option<InvoicePhase> {
    if !record.is_invoice {
        return None;
    }
    if record.status == SettlementStatus::Paid {
        return Some(InvoicePhase::Paid);
    }
    match record.effective_invoice_state() {
        InvoiceState::Open => Some(InvoicePhase::Accumulating),
        InvoiceState::Closed => Some(InvoicePhase::Payable {
            late: record.due_date.is_some_and(|due| due < today),
        }),
    }
}

/// A closed, still-pending invoice ready to be settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayableInvoice<'a> {
    pub record: &'a LedgerRecord,
    pub late: bool,
}

/// The payable list: closed and pending, newest due date first.
pub fn payable_invoices<'a>(
    records: &'a [LedgerRecord],
    today: DateTime<Utc>,
) -> Vec<PayableInvoice<'a>> {
    let mut payable: Vec<PayableInvoice<'a>> = records
        .iter()
        .filter_map(|record| match phase(record, today) {
            Some(InvoicePhase::Payable { late }) => Some(PayableInvoice { record, late }),
            _ => None,
        })
        .collect();
    payable.sort_by(|a, b| b.record.due_date.cmp(&a.record.due_date));
    payable
}

/// Settled invoices, newest payment first.
pub fn invoice_history<'a>(records: &'a [LedgerRecord]) -> Vec<&'a LedgerRecord> {
    let mut history: Vec<&LedgerRecord> = records
        .iter()
        .filter(|r| r.is_invoice && r.status == SettlementStatus::Paid)
        .collect();
    history.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
    history
}

/// Payload settling a payable invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInvoice {
    pub record_id: RecordId,
    pub payment_date: DateTime<Utc>,
}

/// Payload undoing an invoice payment.
///
/// The backend applies it as: status back to pending, payment date cleared,
/// billing state forced to closed. A reverted invoice never reopens as
/// accumulating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertInvoice {
    pub record_id: RecordId,
}

/// Validate paying `record` and build the mutation payload.
pub fn pay(record: &LedgerRecord, payment_date: DateTime<Utc>) -> DomainResult<PayInvoice> {
    match phase(record, payment_date) {
        None => Err(DomainError::validation("record is not a credit-card invoice")),
        Some(InvoicePhase::Accumulating) => Err(DomainError::invariant(
            "invoice is still accumulating; close it before paying",
        )),
        Some(InvoicePhase::Paid) => Err(DomainError::conflict("invoice already paid")),
        Some(InvoicePhase::Payable { .. }) => Ok(PayInvoice {
            record_id: record.id,
            payment_date,
        }),
    }
}

/// Validate reverting `record`'s payment and build the mutation payload.
pub fn revert(record: &LedgerRecord) -> DomainResult<RevertInvoice> {
    if !record.is_invoice {
        return Err(DomainError::validation("record is not a credit-card invoice"));
    }
    if record.status != SettlementStatus::Paid {
        return Err(DomainError::invariant("only paid invoices can be reverted"));
    }
    Ok(RevertInvoice {
        record_id: record.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lojista_core::FinancialAccount;
    use lojista_ledger::{Category, RecordType};

    fn utc(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, month, day, 12, 0, 0).unwrap()
    }

    fn invoice(state: Option<InvoiceState>, status: SettlementStatus) -> LedgerRecord {
        LedgerRecord {
            id: RecordId::new(),
            description: "Fatura cartao principal".to_string(),
            amount: 123_400,
            record_type: RecordType::Expense,
            status,
            category: Category::Other,
            timestamp: utc(3, 1),
            due_date: Some(utc(4, 10)),
            payment_date: None,
            financial_account_id: FinancialAccount::CreditMain,
            is_invoice: true,
            invoice_status: state,
            installments: Vec::new(),
        }
    }

    #[test]
    fn lifecycle_scenario_open_close_pay_revert() {
        let today = utc(4, 1);

        // Starts open (absent status): accumulating, not payable.
        let mut record = invoice(None, SettlementStatus::Pending);
        assert_eq!(phase(&record, today), Some(InvoicePhase::Accumulating));
        assert!(payable_invoices(std::slice::from_ref(&record), today).is_empty());

        // Closed, still pending: payable.
        record.invoice_status = Some(InvoiceState::Closed);
        assert_eq!(phase(&record, today), Some(InvoicePhase::Payable { late: false }));
        assert_eq!(payable_invoices(std::slice::from_ref(&record), today).len(), 1);

        // Paid: gone from payable, present in history.
        let payload = pay(&record, utc(4, 8)).unwrap();
        assert_eq!(payload.record_id, record.id);
        record.status = SettlementStatus::Paid;
        record.payment_date = Some(utc(4, 8));
        assert!(payable_invoices(std::slice::from_ref(&record), today).is_empty());
        assert_eq!(invoice_history(std::slice::from_ref(&record)).len(), 1);

        // Reverted: back to closed/pending, never to open.
        revert(&record).unwrap();
        record.status = SettlementStatus::Pending;
        record.payment_date = None;
        record.invoice_status = Some(InvoiceState::Closed);
        assert_eq!(phase(&record, today), Some(InvoicePhase::Payable { late: false }));
    }

    #[test]
    fn overdue_payable_invoices_are_late() {
        let record = invoice(Some(InvoiceState::Closed), SettlementStatus::Pending);
        let after_due = utc(4, 11);
        assert_eq!(phase(&record, after_due), Some(InvoicePhase::Payable { late: true }));

        let on_file_due_date = utc(4, 10);
        // Due at noon, asked at noon: not yet late.
        assert_eq!(
            phase(&record, on_file_due_date),
            Some(InvoicePhase::Payable { late: false })
        );
    }

    #[test]
    fn paid_wins_over_billing_state() {
        let record = invoice(Some(InvoiceState::Open), SettlementStatus::Paid);
        assert_eq!(phase(&record, utc(4, 1)), Some(InvoicePhase::Paid));
    }

    #[test]
    fn non_invoice_records_have_no_phase() {
        let mut record = invoice(None, SettlementStatus::Pending);
        record.is_invoice = false;
        assert_eq!(phase(&record, utc(4, 1)), None);
        assert!(pay(&record, utc(4, 1)).is_err());
        assert!(revert(&record).is_err());
    }

    #[test]
    fn paying_an_accumulating_invoice_is_refused() {
        let record = invoice(None, SettlementStatus::Pending);
        assert!(matches!(
            pay(&record, utc(4, 1)).unwrap_err(),
            DomainError::InvariantViolation(_)
        ));
    }

    #[test]
    fn paying_twice_is_a_conflict() {
        let record = invoice(Some(InvoiceState::Closed), SettlementStatus::Paid);
        assert!(matches!(
            pay(&record, utc(4, 1)).unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn reverting_requires_a_paid_invoice() {
        let record = invoice(Some(InvoiceState::Closed), SettlementStatus::Pending);
        assert!(matches!(
            revert(&record).unwrap_err(),
            DomainError::InvariantViolation(_)
        ));
    }

    #[test]
    fn payable_list_sorts_by_due_date_descending() {
        let mut march = invoice(Some(InvoiceState::Closed), SettlementStatus::Pending);
        march.due_date = Some(utc(3, 10));
        let mut may = invoice(Some(InvoiceState::Closed), SettlementStatus::Pending);
        may.due_date = Some(utc(5, 10));

        let records = vec![march.clone(), may.clone()];
        let payable = payable_invoices(&records, utc(4, 1));
        assert_eq!(payable[0].record.id, may.id);
        assert_eq!(payable[1].record.id, march.id);
        assert!(payable[1].late);
        assert!(!payable[0].late);
    }
}
