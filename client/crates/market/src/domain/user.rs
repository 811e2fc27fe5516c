//! Account DTOs

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

/// Login form
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login result as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    pub user_id: UserId,
    pub username: String,
    /// Role code; kept raw so that a new backend role does not break login
    pub role: String,
}

impl LoginResponse {
    /// Parsed role, `None` if the code is unknown
    pub fn role(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }
}

/// Account registration form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub contact_person: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Contact details update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub contact_person: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}
