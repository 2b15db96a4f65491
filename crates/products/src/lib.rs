//! `lojista-products` — the product catalog snapshot.
//!
//! Derived inventory figures (status, days of supply, turnover) live in
//! `lojista-inventory`; only the persisted catalog fields and the real-margin
//! formula are here.

pub mod product;

pub use product::{Product, real_margin_pct};
