//! Sign Out Use Case
//!
//! Tells the backend, then forgets the session locally whatever it answered.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use platform::session::SessionContext;
use platform::store::SessionStore;

use crate::domain::gateway::AuthGateway;

/// Sign out use case
pub struct SignOutUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    gateway: Arc<G>,
    store: Arc<S>,
    session: SessionContext,
}

impl<G, S> SignOutUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    pub fn new(gateway: Arc<G>, store: Arc<S>, session: SessionContext) -> Self {
        Self {
            gateway,
            store,
            session,
        }
    }

    pub async fn execute(&self) -> AppResult<()> {
        if self.session.is_authenticated() {
            if let Err(e) = self.gateway.logout().await {
                tracing::warn!(error = %e, "Backend logout failed, signing out locally");
            }
        }

        let previous = self.session.clear();
        self.store.clear().await?;

        tracing::info!(
            username = previous.as_ref().and_then(|s| s.username.as_deref()),
            "User signed out"
        );
        Ok(())
    }
}
