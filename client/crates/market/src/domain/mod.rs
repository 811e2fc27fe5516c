//! Domain Layer
//!
//! Roles, request/response DTOs, paging and the gateway trait.

pub mod gateway;
pub mod page;
pub mod product;
pub mod role;
pub mod trade;
pub mod user;

// Re-exports
pub use gateway::AuthGateway;
pub use role::Role;
