//! Settling a pending record or installment.
//!
//! The client validates the transition locally and emits a typed payload; the
//! actual state change happens server-side and is observed through the next
//! full re-fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{DomainError, DomainResult, RecordId};

use crate::model::{LedgerRecord, SettlementStatus};

/// Payload marking a transaction (or one installment of it) as paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayTransaction {
    pub record_id: RecordId,
    pub payment_date: DateTime<Utc>,
    /// Which installment settles; `None` for single-shot records.
    #[serde(default)]
    pub installment_number: Option<u32>,
}

/// Validate settling `record` (or installment `number` of it) and build the
/// mutation payload.
pub fn settle(
    record: &LedgerRecord,
    number: Option<u32>,
    payment_date: DateTime<Utc>,
) -> DomainResult<PayTransaction> {
    if record.is_invoice {
        return Err(DomainError::invariant(
            "credit-card invoices settle through the invoice lifecycle",
        ));
    }

    match number {
        Some(number) => {
            let installment = record
                .installment(number)
                .ok_or_else(DomainError::not_found)?;
            if installment.status == SettlementStatus::Paid {
                return Err(DomainError::conflict("installment already settled"));
            }
        }
        None => {
            if !record.installments.is_empty() {
                return Err(DomainError::validation(
                    "record has an installment plan; settle one installment at a time",
                ));
            }
            if record.status == SettlementStatus::Paid {
                return Err(DomainError::conflict("record already settled"));
            }
        }
    }

    Ok(PayTransaction {
        record_id: record.id,
        payment_date,
        installment_number: number,
    })
}
