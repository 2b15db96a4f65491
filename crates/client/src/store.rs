//! The in-memory snapshot and its refresh-after-write contract.

use std::time::Duration;

use chrono::{DateTime, Utc};

use lojista_core::KpiGoals;
use lojista_ledger::LedgerRecord;
use lojista_orders::EcommerceOrder;
use lojista_products::Product;
use lojista_sales::Sale;

use crate::api::Backend;
use crate::error::ApiError;
use crate::request::MutationRequest;

/// How often the orders list refreshes while that screen is visible.
pub const ORDERS_POLL_INTERVAL: Duration = Duration::from_secs(30);
/// How often the subscription status refreshes while waiting for activation.
pub const SUBSCRIPTION_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Everything fetched from the backend, as one consistent snapshot.
///
/// Aggregations are pure read-only passes over these arrays; they never
/// mutate them. The snapshot itself changes only through `refresh`, which
/// replaces the arrays wholesale; there is no incremental/delta update.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub records: Vec<LedgerRecord>,
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
    pub orders: Vec<EcommerceOrder>,
    pub goals: KpiGoals,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch every list and the goals snapshot.
    ///
    /// On any failure the prior snapshot stays untouched: stale but
    /// consistent beats half-updated.
    pub async fn refresh(
        &mut self,
        backend: &impl Backend,
        now: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let records = backend.list_records().await?;
        let sales = backend.list_sales().await?;
        let products = backend.list_products().await?;
        let orders = backend.list_orders().await?;
        let goals = backend.fetch_goals().await?;

        self.records = records;
        self.sales = sales;
        self.products = products;
        self.orders = orders;
        self.goals = goals;
        self.refreshed_at = Some(now);
        Ok(())
    }

    /// Submit a mutation, then re-fetch everything.
    ///
    /// The full re-fetch is the only way mutations become visible; the client
    /// never merges speculatively. A rejected mutation leaves the snapshot
    /// exactly as it was.
    pub async fn submit(
        &mut self,
        backend: &impl Backend,
        request: &MutationRequest,
        now: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        if let Err(err) = backend.submit(request).await {
            tracing::warn!(%err, "mutation failed; snapshot left untouched");
            return Err(err);
        }
        self.refresh(backend, now).await
    }
}
