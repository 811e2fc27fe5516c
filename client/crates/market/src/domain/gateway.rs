//! Gateway Traits
//!
//! Interfaces the use cases depend on. The HTTP implementation is in the
//! infrastructure layer.

use kernel::error::app_error::AppResult;

use crate::domain::user::{LoginRequest, LoginResponse};

/// Authentication gateway trait
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange credentials for a token
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse>;

    /// Invalidate the current token on the backend
    async fn logout(&self) -> AppResult<()>;
}
