//! `lojista-client` — the backend boundary.
//!
//! All persistence and business mutation live server-side; this crate holds
//! the typed port to that backend, the bearer session, the tagged mutation
//! payloads and the snapshot store with its refresh-after-write contract.

pub mod api;
pub mod error;
pub mod request;
pub mod session;
pub mod store;

pub use api::{Backend, HttpBackend};
pub use error::ApiError;
pub use request::MutationRequest;
pub use session::Session;
pub use store::{ORDERS_POLL_INTERVAL, SUBSCRIPTION_POLL_INTERVAL, Workspace};
