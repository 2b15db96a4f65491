//! `lojista-invoicing` — credit-card invoice lifecycle.
//!
//! An invoice is a ledger record flagged `isInvoice`; its lifecycle here is a
//! derived view over the record snapshot, plus local validation of the pay
//! and revert transitions. State changes happen server-side and are observed
//! through the next full re-fetch.

pub mod invoice;

pub use invoice::{
    InvoicePhase, PayInvoice, PayableInvoice, RevertInvoice, invoice_history, pay,
    payable_invoices, phase, revert,
};
