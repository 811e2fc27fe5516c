//! Shared Kernel - Vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" of the marketplace client:
//! - The unified error type and result alias
//! - Typed decimal identifiers for backend entities
//!
//! **Design Principle**: Only include things that mean the same thing
//! in the codec, the transport and the marketplace API.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

pub use error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
