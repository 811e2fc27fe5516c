//! Session Context
//!
//! The signed-in state is an explicit object handed to whoever needs it,
//! never ambient storage. Lifecycle:
//! - created on login ([`SessionContext::establish`])
//! - dropped on logout or when the backend answers 401 ([`SessionContext::clear`])
//!
//! Persistence between runs is a separate concern behind
//! [`SessionStore`](crate::store::SessionStore).

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::store::SessionStore;
use crate::token;

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token issued at login
    pub token: String,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    /// Role code as sent by the backend (`farmer`, `purchaser`, `admin`)
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Taken from the token's `exp` claim when present
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session for a freshly issued token
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = token::expires_at(&token);
        Self {
            token,
            user_id: None,
            username: None,
            role: None,
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Attach the user the token was issued to
    pub fn with_user(
        mut self,
        user_id: UserId,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        self.user_id = Some(user_id);
        self.username = Some(username.into());
        self.role = Some(role.into());
        self
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    /// Time left until expiry, zero once expired
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| (at - Utc::now()).max(Duration::zero()))
    }
}

// ============================================================================
// In-process context
// ============================================================================

/// Shared handle to the current session
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    /// A context with nobody signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted session, discarding it if it has expired
    pub async fn restore<S: SessionStore>(store: &S) -> AppResult<Self> {
        let context = Self::new();
        match store.load().await? {
            Some(session) if session.is_expired() => {
                tracing::info!("Stored session has expired, discarding it");
                store.clear().await?;
            }
            Some(session) => {
                *context.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
            }
            None => {}
        }
        Ok(context)
    }

    /// Install a session after a successful login
    pub fn establish(&self, session: Session) {
        tracing::info!(
            user_id = session.user_id.as_ref().map(|id| id.as_str()),
            role = session.role.as_deref(),
            "Session established"
        );
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Drop the current session, returning it
    pub fn clear(&self) -> Option<Session> {
        let previous = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::info!("Session cleared");
        }
        previous
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bearer token of a live session
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|session| !session.is_expired())
            .map(|session| session.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
