//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client's technical foundations:
//! - API configuration (base URL, timeout)
//! - Explicit session context and session persistence
//! - Bearer token claim decoding
//! - The HTTP transport wrapper that runs every body through the codec

pub mod config;
pub mod session;
pub mod store;
pub mod token;
pub mod transport;

pub use config::ApiConfig;
pub use session::{Session, SessionContext};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use transport::HttpTransport;
