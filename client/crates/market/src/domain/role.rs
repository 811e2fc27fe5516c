use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MarketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("farmer")]
    Farmer,
    #[display("purchaser")]
    Purchaser,
    #[display("admin")]
    Admin,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Farmer => "farmer",
            Purchaser => "purchaser",
            Admin => "admin",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "farmer" => Some(Farmer),
            "purchaser" => Some(Purchaser),
            "admin" => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| MarketError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        for role in [Role::Farmer, Role::Purchaser, Role::Admin] {
            assert_eq!(Role::from_code(role.code()), Some(role));
            assert_eq!(role.to_string(), role.code());
        }
        assert_eq!(Role::from_code("FARMER"), None);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("purchaser".parse::<Role>().unwrap(), Role::Purchaser);
        assert!(matches!(
            "guest".parse::<Role>(),
            Err(MarketError::UnknownRole(code)) if code == "guest"
        ));
    }

    #[test]
    fn test_role_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let role: Role = serde_json::from_str(r#""farmer""#).unwrap();
        assert_eq!(role, Role::Farmer);
        assert!(Role::Admin.is_admin());
    }
}
