//! Tagged mutation payloads.
//!
//! One variant per mutation kind, so the fields each mutation requires are
//! enforced by the type instead of a loosely-typed bag.

use serde::{Deserialize, Serialize};

use lojista_core::{KpiGoals, OrderId};
use lojista_invoicing::{PayInvoice, RevertInvoice};
use lojista_ledger::PayTransaction;

/// A mutation submitted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MutationRequest {
    PayTransaction(PayTransaction),
    PayInvoice(PayInvoice),
    RevertInvoice(RevertInvoice),
    CancelOrder { order_id: OrderId },
    SaveGoals { goals: KpiGoals },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lojista_core::RecordId;

    #[test]
    fn requests_serialize_with_a_kind_tag() {
        let request = MutationRequest::PayInvoice(PayInvoice {
            record_id: RecordId::new(),
            payment_date: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "payInvoice");
        assert!(json["recordId"].is_string());
        assert!(json["paymentDate"].is_string());
    }

    #[test]
    fn cancel_order_round_trips() {
        let request = MutationRequest::CancelOrder {
            order_id: OrderId::new(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: MutationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn revert_carries_only_the_record_id() {
        let record_id = RecordId::new();
        let request = MutationRequest::RevertInvoice(RevertInvoice { record_id });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "revertInvoice");
        assert_eq!(json["recordId"], record_id.to_string());
    }
}
