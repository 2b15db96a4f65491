//! `lojista-ledger` — the financial ledger snapshot and its derived views.
//!
//! Records arrive from the backend as one flat list. Everything else here is
//! a pure pass over that list: the classifier expands records into effective
//! entries for a specific view and period, and the cash-flow aggregator sums
//! the settled ones.

pub mod cashflow;
pub mod classify;
pub mod model;
pub mod settle;

pub use cashflow::{CashFlowSummary, aggregate_cash_flow};
pub use classify::{EffectiveEntry, LedgerView, classify};
pub use model::{Category, Installment, InvoiceState, LedgerRecord, RecordType, SettlementStatus};
pub use settle::{PayTransaction, settle};
