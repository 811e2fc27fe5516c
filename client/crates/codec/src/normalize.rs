//! Recursive document walks
//!
//! One walker serves every direction. A walk is parameterised by the test
//! that decides whether an object field is an identifier, and by the scalar
//! conversion applied both to matched fields and to every scalar leaf.

use crate::field::{has_generic_id_suffix, is_identifier_field};
use crate::payload::Payload;
use crate::scalar::{is_likely_large_identifier, to_bigint_or_passthrough, to_decimal_string};

/// Direction of a normalization walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Allowlisted identifier fields, and every other scalar leaf, become
    /// decimal strings
    ToDecimalString,
    /// Fields matching the generic suffix rule, and every other scalar leaf,
    /// become big integers where that is lossless
    ToNumeric,
}

fn allowlisted_key(key: &str, _: &Payload) -> bool {
    is_identifier_field(key)
}

fn generic_id_key(key: &str, _: &Payload) -> bool {
    has_generic_id_suffix(key)
}

fn large_identifier_value(_: &str, value: &Payload) -> bool {
    is_likely_large_identifier(value)
}

/// Walk strategy
pub(crate) struct Walker {
    /// Whether the value under `key` is treated as an identifier
    matches: fn(&str, &Payload) -> bool,
    /// Conversion for identifiers and scalar leaves
    convert: fn(Payload) -> Payload,
}

impl Walker {
    pub(crate) const TO_DECIMAL_STRING: Walker = Walker {
        matches: allowlisted_key,
        convert: to_decimal_string,
    };

    pub(crate) const TO_NUMERIC: Walker = Walker {
        matches: generic_id_key,
        convert: to_bigint_or_passthrough,
    };

    /// Request bodies: the value decides, not the key
    pub(crate) const REQUEST: Walker = Walker {
        matches: large_identifier_value,
        convert: to_decimal_string,
    };

    pub(crate) fn walk(&self, value: Payload) -> Payload {
        match value {
            Payload::Null => Payload::Null,
            Payload::Array(items) => {
                Payload::Array(items.into_iter().map(|item| self.walk(item)).collect())
            }
            Payload::Object(fields) => Payload::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| {
                        let value = if !value.is_null() && (self.matches)(&key, &value) {
                            (self.convert)(value)
                        } else {
                            self.walk(value)
                        };
                        (key, value)
                    })
                    .collect(),
            ),
            scalar => (self.convert)(scalar),
        }
    }
}

/// Normalize identifier fields throughout a document
///
/// Matched fields are converted as a whole, even when they hold a composite
/// value; everything else is walked recursively. Nulls are preserved.
///
/// ```
/// use codec::{Direction, Payload, normalize_identifier_fields_deep};
///
/// let doc = Payload::object([("orderId", Payload::Number(42.0))]);
/// let out = normalize_identifier_fields_deep(doc, Direction::ToDecimalString);
/// assert_eq!(out.get("orderId"), Some(&Payload::from("42")));
/// ```
pub fn normalize_identifier_fields_deep(document: Payload, direction: Direction) -> Payload {
    match direction {
        Direction::ToDecimalString => Walker::TO_DECIMAL_STRING.walk(document),
        Direction::ToNumeric => Walker::TO_NUMERIC.walk(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_to_string_stringifies_every_scalar_leaf() {
        let doc = Payload::object([
            ("quantity", Payload::Number(10.0)),
            ("organic", Payload::Bool(true)),
            ("note", Payload::Null),
            ("tags", Payload::Array(vec![Payload::Number(1.5)])),
        ]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToDecimalString);
        assert_eq!(
            out,
            Payload::object([
                ("quantity", Payload::from("10")),
                ("organic", Payload::from("true")),
                ("note", Payload::Null),
                ("tags", Payload::Array(vec![Payload::from("1.5")])),
            ])
        );
    }

    #[test]
    fn test_to_string_matched_composite_is_stringified_whole() {
        let doc = Payload::object([("id", Payload::Array(vec![Payload::Number(1.0)]))]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToDecimalString);
        assert_eq!(out.get("id"), Some(&Payload::from("[1]")));
    }

    #[test]
    fn test_to_numeric_converts_matched_and_leaves() {
        let doc = Payload::object([
            ("productId", Payload::from("9007199254740993")),
            ("quantity", Payload::from("10")),
            ("name", Payload::from("Rice")),
            ("price", Payload::Number(3.5)),
        ]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToNumeric);
        assert_eq!(
            out.get("productId"),
            Some(&Payload::BigInt(BigInt::from(9007199254740993i64)))
        );
        assert_eq!(out.get("quantity"), Some(&Payload::BigInt(BigInt::from(10))));
        assert_eq!(out.get("name"), Some(&Payload::from("Rice")));
        assert_eq!(out.get("price"), Some(&Payload::Number(3.5)));
    }

    #[test]
    fn test_to_numeric_does_not_descend_into_matched_composite() {
        let inner = Payload::object([("quantity", Payload::from("10"))]);
        let doc = Payload::object([("orderId", inner.clone())]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToNumeric);
        assert_eq!(out.get("orderId"), Some(&inner));
    }

    #[test]
    fn test_nested_arrays_of_objects() {
        let doc = Payload::Array(vec![Payload::object([(
            "items",
            Payload::Array(vec![Payload::object([(
                "demandId",
                Payload::BigInt(BigInt::from(7)),
            )])]),
        )])]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToDecimalString);
        assert_eq!(out.to_string(), r#"[{"items":[{"demandId":"7"}]}]"#);
    }
}
