//! Infrastructure Layer
//!
//! HTTP implementation of the marketplace gateway.

pub mod api;
