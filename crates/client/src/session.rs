//! Bearer session state.

use chrono::{DateTime, Utc};

use lojista_core::UserId;

/// The authenticated session, passed explicitly to whatever needs it.
///
/// Created once at login, dropped at logout, never implicitly recreated. A
/// `SessionExpired` error from any call is the signal to drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
    token: String,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn open(user_id: UserId, token: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            token: token.into(),
            started_at,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The bearer token attached to every backend call.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
