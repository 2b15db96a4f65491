//! `lojista-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by every crate in the workspace: typed
//! identifiers, the domain error model, competency periods, settlement rails
//! and the KPI goals snapshot. No I/O happens here.

pub mod account;
pub mod error;
pub mod goals;
pub mod id;
pub mod period;

pub use account::FinancialAccount;
pub use error::{DomainError, DomainResult};
pub use goals::{FeeSchedule, KpiGoals, TurnoverWindow};
pub use id::{OrderId, ProductId, RecordId, SaleId, UserId};
pub use period::Competency;
