//! `lojista-inventory` — derived stock intelligence.
//!
//! Everything here is recomputed from the latest product and sales snapshot
//! on every aggregation pass; nothing is persisted.

pub mod ranking;
pub mod turnover;

pub use ranking::{best_sellers, slowest_movers};
pub use turnover::{
    MarginSummary, ProductKpi, StockHistogram, StockStatus, assess, margin_summary,
    stock_histogram,
};
