//! `lojista-sales` — point-of-sale sales snapshot.
//!
//! Sales are recognized at transaction time; settlement is the ledger's
//! concern. This crate only filters and sums the fetched list.

pub mod sale;

pub use sale::{Sale, SaleItem, sales_in_period, sold_quantities};
