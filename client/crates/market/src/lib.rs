//! Agricultural Marketplace API
//!
//! Typed access to the marketplace backend on top of the platform transport.
//!
//! Structure:
//! - `domain/` - roles, request/response DTOs, paging, gateway trait
//! - `application/` - sign-in and sign-out use cases
//! - `infra/` - [`MarketApi`], the HTTP implementation
//! - `endpoints` - backend paths
//!
//! Every response has already been through the identifier codec when it
//! reaches this crate, so ids arrive as decimal strings and deserialize into
//! the typed [`kernel::id::Id`] aliases.

pub mod application;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod infra;

pub use application::{sign_in::SignInUseCase, sign_out::SignOutUseCase};
pub use domain::gateway::AuthGateway;
pub use domain::page::{Page, PageQuery};
pub use domain::role::Role;
pub use error::{MarketError, MarketResult};
pub use infra::api::MarketApi;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::page::*;
    pub use crate::domain::product::*;
    pub use crate::domain::role::*;
    pub use crate::domain::trade::*;
    pub use crate::domain::user::*;
}
