//! Scalar conversions
//!
//! Field-level rules applied to single values. None of these fail: a value
//! that cannot be converted is returned unchanged and a warning is logged.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::str::FromStr;

use crate::payload::Payload;

/// Largest integer a double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
/// Smallest integer a double represents exactly
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Parse `[+-]?[0-9]+` exactly into an arbitrary-precision integer
///
/// No whitespace, radix prefixes, separators or exponents are accepted.
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = BigInt::from_str(digits).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn is_beyond_safe(n: f64) -> bool {
    n.abs() > MAX_SAFE_INTEGER as f64
}

/// Decimal rendering of a double, never in exponent form
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Convert a value to an arbitrary-precision integer where that is lossless
///
/// - big integers are returned unchanged
/// - integer strings are parsed; other strings pass through with a warning
/// - numbers beyond the safe range are converted; if that fails (infinity)
///   their decimal string is returned
/// - everything else, including safe numbers, passes through
pub fn to_bigint_or_passthrough(value: Payload) -> Payload {
    match value {
        big @ Payload::BigInt(_) => big,
        Payload::String(text) => match parse_integer(&text) {
            Some(int) => Payload::BigInt(int),
            None => {
                tracing::warn!(value = %text, "String is not an integer, passing through");
                Payload::String(text)
            }
        },
        Payload::Number(n) if is_beyond_safe(n) => match BigInt::from_f64(n) {
            Some(int) => Payload::BigInt(int),
            None => {
                tracing::warn!(value = n, "Number has no integer form, using its decimal string");
                Payload::String(format_number(n))
            }
        },
        other => other,
    }
}

/// Render a value as text, `None` for null
fn render(value: &Payload) -> Option<String> {
    match value {
        Payload::Null => None,
        Payload::String(s) => Some(s.clone()),
        Payload::BigInt(v) => Some(v.to_string()),
        Payload::Number(n) => Some(format_number(*n)),
        Payload::Bool(b) => Some(b.to_string()),
        composite => Some(composite.to_string()),
    }
}

/// Convert a value to its decimal string form
///
/// Null passes through and strings are assumed to be decimal already.
/// Non-integral or already rounded doubles are rendered as they are; the
/// lost digits cannot be recovered here.
pub fn to_decimal_string(value: Payload) -> Payload {
    match value {
        Payload::Null => Payload::Null,
        Payload::String(s) => Payload::String(s),
        other => render(&other).map(Payload::String).unwrap_or_default(),
    }
}

/// Whether a value is, or could losslessly become, a large integer identifier
pub fn is_likely_large_identifier(value: &Payload) -> bool {
    match value {
        Payload::BigInt(_) => true,
        Payload::Number(n) => is_beyond_safe(*n),
        Payload::String(s) => parse_integer(s).is_some(),
        _ => false,
    }
}

/// Compare two identifier values by their decimal rendering
pub fn identifiers_equal(a: &Payload, b: &Payload) -> bool {
    a == b || render(a) == render(b)
}
