//! Common ID Types
//!
//! Type-safe wrappers for backend entity identifiers.
//!
//! The backend issues 64-bit snowflake keys and always sends them as decimal
//! strings. Once an identifier reaches application code it is an opaque
//! decimal string: it is compared and re-submitted, never used for arithmetic.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper over a canonical decimal string
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type OrderId = Id<markers::Order>;
///
/// let id: OrderId = "1876543210987654321".parse().unwrap();
/// assert_eq!(id.as_str(), "1876543210987654321");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Parse a decimal identifier
    ///
    /// Accepts ASCII digits only. Leading zeros are dropped so that two
    /// spellings of the same key compare equal.
    pub fn parse_str(s: &str) -> AppResult<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::bad_request(format!("Invalid identifier: {:?}", s)));
        }
        let trimmed = s.trim_start_matches('0');
        let value = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self {
            value: value.to_string(),
            _marker: PhantomData,
        })
    }

    /// Get the decimal string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the decimal string
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse_str(s)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self {
            value: value.to_string(),
            _marker: PhantomData,
        }
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        // Numbers are read through `Value` so that integer literals keep every digit.
        let text = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "expected a decimal identifier, found {}",
                    other
                )));
            }
        };
        Self::parse_str(&text).map_err(|e| D::Error::custom(e.message().to_string()))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Farmer;
    pub struct Purchaser;
    pub struct Product;
    pub struct Category;
    pub struct OriginArea;
    pub struct Demand;
    pub struct Docking;
    pub struct Contract;
    pub struct Order;
    pub struct Payment;
    pub struct Logistics;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type FarmerId = Id<markers::Farmer>;
pub type PurchaserId = Id<markers::Purchaser>;
pub type ProductId = Id<markers::Product>;
pub type CategoryId = Id<markers::Category>;
pub type OriginAreaId = Id<markers::OriginArea>;
pub type DemandId = Id<markers::Demand>;
pub type DockingId = Id<markers::Docking>;
pub type ContractId = Id<markers::Contract>;
pub type OrderId = Id<markers::Order>;
pub type PaymentId = Id<markers::Payment>;
pub type LogisticsId = Id<markers::Logistics>;
