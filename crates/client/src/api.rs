//! The backend port and its HTTP implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use lojista_core::KpiGoals;
use lojista_ledger::LedgerRecord;
use lojista_orders::EcommerceOrder;
use lojista_products::Product;
use lojista_sales::Sale;

use crate::error::ApiError;
use crate::request::MutationRequest;
use crate::session::Session;

/// Everything the client needs from the backend: four lists, the goals
/// snapshot, and one mutation endpoint.
///
/// The port exists so store and aggregation logic can be exercised against an
/// in-memory backend in tests.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_records(&self) -> Result<Vec<LedgerRecord>, ApiError>;
    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError>;
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn list_orders(&self) -> Result<Vec<EcommerceOrder>, ApiError>;
    async fn fetch_goals(&self) -> Result<KpiGoals, ApiError>;
    async fn submit(&self, request: &MutationRequest) -> Result<(), ApiError>;
}

/// REST-over-HTTPS implementation with bearer auth.
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
    session: Session,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.session.token())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, body));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a failure status to the uniform error contract: 401/403 always mean
/// the session is invalid; anything else surfaces the body verbatim.
fn classify_failure(status: StatusCode, body: String) -> ApiError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ApiError::SessionExpired;
    }
    if body.is_empty() {
        ApiError::Rejected(status.to_string())
    } else {
        ApiError::Rejected(body)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_records(&self) -> Result<Vec<LedgerRecord>, ApiError> {
        self.get_json("records").await
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        self.get_json("sales").await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("products").await
    }

    async fn list_orders(&self) -> Result<Vec<EcommerceOrder>, ApiError> {
        self.get_json("orders").await
    }

    async fn fetch_goals(&self) -> Result<KpiGoals, ApiError> {
        self.get_json("goals").await
    }

    async fn submit(&self, request: &MutationRequest) -> Result<(), ApiError> {
        let url = self.url("mutations");
        tracing::debug!(%url, "submitting mutation");
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.session.token())
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_session_expired() {
        assert_eq!(
            classify_failure(StatusCode::UNAUTHORIZED, String::new()),
            ApiError::SessionExpired
        );
        assert_eq!(
            classify_failure(StatusCode::FORBIDDEN, "whatever".into()),
            ApiError::SessionExpired
        );
    }

    #[test]
    fn backend_rejections_surface_the_body_verbatim() {
        let err = classify_failure(StatusCode::UNPROCESSABLE_ENTITY, "estoque insuficiente".into());
        assert_eq!(err, ApiError::Rejected("estoque insuficiente".into()));
    }

    #[test]
    fn empty_rejection_bodies_fall_back_to_the_status_line() {
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert!(matches!(err, ApiError::Rejected(msg) if msg.contains("500")));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let session = Session::open(
            lojista_core::UserId::new(),
            "tok",
            chrono::DateTime::<chrono::Utc>::MIN_UTC,
        );
        let backend = HttpBackend::new("https://api.example.test/", session);
        assert_eq!(backend.url("records"), "https://api.example.test/records");
    }
}
