//! Sign In Use Case
//!
//! Exchanges credentials for a token and installs the resulting session.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use platform::session::{Session, SessionContext};
use platform::store::SessionStore;

use crate::domain::gateway::AuthGateway;
use crate::domain::user::LoginRequest;
use crate::error::MarketError;

/// Sign in use case
pub struct SignInUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    gateway: Arc<G>,
    store: Arc<S>,
    session: SessionContext,
}

impl<G, S> SignInUseCase<G, S>
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

    pub async fn execute(&self, request: LoginRequest) -> AppResult<Session> {
        let response = self.gateway.login(&request).await?;
        if response.token.is_empty() {
            return Err(MarketError::MissingToken.into());
        }
        if response.role().is_none() {
            tracing::warn!(role = %response.role, "Signed in with an unknown role");
        }

        let session = Session::new(response.token).with_user(
            response.user_id,
            response.username,
            response.role,
        );
        self.session.establish(session.clone());
        self.store.save(&session).await?;

        Ok(session)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::user::LoginResponse;
    use kernel::error::app_error::AppError;
    use kernel::error::kind::ErrorKind;
    use platform::store::MemorySessionStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway answering from canned results
    pub(crate) struct FakeGateway {
        pub token: String,
        pub fail_logout: bool,
        pub logouts: AtomicUsize,
    }

    impl FakeGateway {
        pub(crate) fn issuing(token: &str) -> Self {
            Self {
                token: token.to_string(),
                fail_logout: false,
                logouts: AtomicUsize::new(0),
            }
        }
    }

    impl AuthGateway for FakeGateway {
        async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
            if request.password != "secret" {
                return Err(AppError::rejected("用户名或密码错误").with_backend_code(500));
            }
            Ok(LoginResponse {
                token: self.token.clone(),
                user_id: "1876543210987654321".parse()?,
                username: request.username.clone(),
                role: "farmer".to_string(),
            })
        }

        async fn logout(&self) -> AppResult<()> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            if self.fail_logout {
                return Err(AppError::network("connection reset"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sign_in_establishes_and_persists() {
        let store = Arc::new(MemorySessionStore::new());
        let context = SessionContext::new();
        let use_case = SignInUseCase::new(
            Arc::new(FakeGateway::issuing("token-1")),
            store.clone(),
            context.clone(),
        );

        let session = use_case
            .execute(LoginRequest::new("li", "secret"))
            .await
            .unwrap();

        assert_eq!(
            session.user_id.as_ref().map(|id| id.as_str()),
            Some("1876543210987654321")
        );
        assert_eq!(context.token().as_deref(), Some("token-1"));
        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_no_session() {
        let store = Arc::new(MemorySessionStore::new());
        let context = SessionContext::new();
        let use_case = SignInUseCase::new(
            Arc::new(FakeGateway::issuing("token-1")),
            store.clone(),
            context.clone(),
        );

        let err = use_case
            .execute(LoginRequest::new("li", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Rejected);
        assert!(!context.is_authenticated());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_token_is_an_error() {
        let use_case = SignInUseCase::new(
            Arc::new(FakeGateway::issuing("")),
            Arc::new(MemorySessionStore::new()),
            SessionContext::new(),
        );
        let err = use_case
            .execute(LoginRequest::new("li", "secret"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPayload);
    }
}
