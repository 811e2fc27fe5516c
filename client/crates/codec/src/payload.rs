//! Payload - the document model crossing the client/server boundary
//!
//! A JSON-like tree in which the two numeric representations are kept
//! apart: [`Payload::Number`] is the double-precision number with the
//! 53-bit safe-integer limit, [`Payload::BigInt`] is the arbitrary-precision
//! integer. Conversions between them live in [`crate::scalar`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, CodecResult};
use crate::scalar::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, parse_integer};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Array(Vec<Payload>),
    Object(BTreeMap<String, Payload>),
}

impl Payload {
    /// Build an object from key/value pairs
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Payload)>,
    {
        Payload::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Payload::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a field of an object
    pub fn get(&self, key: &str) -> Option<&Payload> {
        match self {
            Payload::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Remove a field from an object, returning it
    pub fn take(&mut self, key: &str) -> Option<Payload> {
        match self {
            Payload::Object(fields) => fields.remove(key),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Payload::Null => "null",
            Payload::Bool(_) => "bool",
            Payload::Number(_) => "number",
            Payload::BigInt(_) => "bigint",
            Payload::String(_) => "string",
            Payload::Array(_) => "array",
            Payload::Object(_) => "object",
        }
    }

    /// Read the payload as a typed value
    ///
    /// Identifier fields should already be decimal strings at this point,
    /// so they land in [`kernel::id::Id`] fields unchanged.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> CodecResult<T> {
        serde_json::from_value(serde_json::Value::from(self)).map_err(|e| {
            let err = CodecError::Deserialize(e);
            err.log();
            err
        })
    }

    /// Build a payload from any serializable value
    pub fn from_serialize<T: Serialize>(value: &T) -> CodecResult<Self> {
        serde_json::to_value(value).map(Payload::from).map_err(|e| {
            let err = CodecError::Serialize(e);
            err.log();
            err
        })
    }

    fn from_number(number: &serde_json::Number) -> Self {
        let text = number.to_string();
        match parse_integer(&text) {
            Some(int) => match int.to_i64() {
                Some(v) if (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&v) => {
                    Payload::Number(v as f64)
                }
                _ => Payload::BigInt(int),
            },
            None => text
                .parse::<f64>()
                .map(Payload::Number)
                .unwrap_or(Payload::String(text)),
        }
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Payload::Null,
            Value::Bool(b) => Payload::Bool(b),
            Value::Number(n) => Payload::from_number(&n),
            Value::String(s) => Payload::String(s),
            Value::Array(items) => Payload::Array(items.into_iter().map(Payload::from).collect()),
            Value::Object(fields) => Payload::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Payload::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Payload> for serde_json::Value {
    fn from(payload: Payload) -> Self {
        use serde_json::{Number, Value};
        match payload {
            Payload::Null => Value::Null,
            Payload::Bool(b) => Value::Bool(b),
            Payload::Number(v) => {
                if is_safe_integral(v) {
                    Value::from(v as i64)
                } else {
                    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
                }
            }
            Payload::BigInt(v) => {
                let text = v.to_string();
                Number::from_str(&text)
                    .map(Value::Number)
                    .unwrap_or(Value::String(text))
            }
            Payload::String(s) => Value::String(s),
            Payload::Array(items) => {
                Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Payload::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn is_safe_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER as f64
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Null => serializer.serialize_unit(),
            Payload::Bool(b) => serializer.serialize_bool(*b),
            Payload::Number(v) if is_safe_integral(*v) => serializer.serialize_i64(*v as i64),
            Payload::Number(v) if v.is_finite() => serializer.serialize_f64(*v),
            Payload::Number(_) => serializer.serialize_unit(),
            Payload::BigInt(v) => {
                if let Some(i) = v.to_i64() {
                    serializer.serialize_i64(i)
                } else if let Some(u) = v.to_u64() {
                    serializer.serialize_u64(u)
                } else {
                    let text = v.to_string();
                    match serde_json::Number::from_str(&text) {
                        Ok(n) => n.serialize(serializer),
                        Err(_) => serializer.serialize_str(&text),
                    }
                }
            }
            Payload::String(s) => serializer.serialize_str(s),
            Payload::Array(items) => serializer.collect_seq(items),
            Payload::Object(fields) => serializer.collect_map(fields),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Payload::from)
    }
}

/// Compact JSON text
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// ============================================================================
// Constructors from Rust values
// ============================================================================

impl From<bool> for Payload {
    fn from(v: bool) -> Self {
        Payload::Bool(v)
    }
}

impl From<f64> for Payload {
    fn from(v: f64) -> Self {
        Payload::Number(v)
    }
}

impl From<i64> for Payload {
    /// Values beyond the safe range become [`Payload::BigInt`] so nothing is rounded.
    fn from(v: i64) -> Self {
        if (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&v) {
            Payload::Number(v as f64)
        } else {
            Payload::BigInt(BigInt::from(v))
        }
    }
}

impl From<i32> for Payload {
    fn from(v: i32) -> Self {
        Payload::Number(f64::from(v))
    }
}

impl From<u32> for Payload {
    fn from(v: u32) -> Self {
        Payload::Number(f64::from(v))
    }
}

impl From<u64> for Payload {
    fn from(v: u64) -> Self {
        if v <= MAX_SAFE_INTEGER as u64 {
            Payload::Number(v as f64)
        } else {
            Payload::BigInt(BigInt::from(v))
        }
    }
}

impl From<BigInt> for Payload {
    fn from(v: BigInt) -> Self {
        Payload::BigInt(v)
    }
}

impl From<&str> for Payload {
    fn from(v: &str) -> Self {
        Payload::String(v.to_string())
    }
}

impl From<String> for Payload {
    fn from(v: String) -> Self {
        Payload::String(v)
    }
}

impl<T> From<kernel::id::Id<T>> for Payload {
    fn from(id: kernel::id::Id<T>) -> Self {
        Payload::String(id.into_string())
    }
}

impl From<Vec<Payload>> for Payload {
    fn from(v: Vec<Payload>) -> Self {
        Payload::Array(v)
    }
}

impl From<BTreeMap<String, Payload>> for Payload {
    fn from(v: BTreeMap<String, Payload>) -> Self {
        Payload::Object(v)
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Payload::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_integers_beyond_safe_range_stay_exact() {
        let payload: Payload = serde_json::from_str(r#"{"orderId": 123456789012345678901}"#).unwrap();
        let expected: BigInt = "123456789012345678901".parse().unwrap();
        assert_eq!(payload.get("orderId"), Some(&Payload::BigInt(expected)));
    }

    #[test]
    fn test_json_small_numbers_are_standard_numbers() {
        let payload: Payload = serde_json::from_str(r#"[10, -3, 2.5, 9007199254740991]"#).unwrap();
        assert_eq!(
            payload,
            Payload::Array(vec![
                Payload::Number(10.0),
                Payload::Number(-3.0),
                Payload::Number(2.5),
                Payload::Number(9007199254740991.0),
            ])
        );
    }

    #[test]
    fn test_bigint_serializes_as_raw_number() {
        let big: BigInt = "123456789012345678901".parse().unwrap();
        let payload = Payload::object([("id", Payload::BigInt(big))]);
        assert_eq!(payload.to_string(), r#"{"id":123456789012345678901}"#);
    }

    #[test]
    fn test_number_serialization() {
        assert_eq!(Payload::Number(10.0).to_string(), "10");
        assert_eq!(Payload::Number(2.5).to_string(), "2.5");
        assert_eq!(Payload::Number(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Payload::from(42i64), Payload::Number(42.0));
        assert_eq!(
            Payload::from(9007199254740993i64),
            Payload::BigInt(BigInt::from(9007199254740993i64))
        );
        assert_eq!(
            Payload::from(u64::MAX),
            Payload::BigInt(BigInt::from(u64::MAX))
        );
        assert_eq!(Payload::from(None::<String>), Payload::Null);
    }

    #[test]
    fn test_deserialize_into_typed() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Row {
            product_id: kernel::id::ProductId,
            name: String,
        }

        let payload = Payload::object([
            ("productId", Payload::from("9007199254740993")),
            ("name", Payload::from("Rice")),
        ]);
        let row: Row = payload.deserialize_into().unwrap();
        assert_eq!(row.product_id.as_str(), "9007199254740993");
        assert_eq!(row.name, "Rice");
    }

    #[test]
    fn test_deserialize_into_shape_mismatch() {
        let result: CodecResult<Vec<String>> = Payload::from("x").deserialize_into();
        assert!(matches!(result, Err(CodecError::Deserialize(_))));
    }

    #[test]
    fn test_from_serialize_reports_serialize_failure() {
        let mut pairs = BTreeMap::new();
        pairs.insert((1u8, 2u8), "tuple keys have no JSON form");
        let err = Payload::from_serialize(&pairs).unwrap_err();
        assert!(matches!(err, CodecError::Serialize(_)));
        assert!(err.to_string().starts_with("Value cannot be represented"));
    }
}
