//! Application Layer
//!
//! Use cases that combine the gateway, the session context and the
//! session store.

pub mod sign_in;
pub mod sign_out;
