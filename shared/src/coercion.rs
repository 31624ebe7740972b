//! Permissive coercion of client-supplied values
//!
//! Request bodies arrive either as URL-encoded forms (every value is text)
//! or as JSON (strings, numbers, booleans). Rather than rejecting anything
//! that is not exactly the expected type, the API coerces values the way a
//! loosely typed web stack would:
//!
//! - a field is "present" when it is truthy (non-empty text, non-zero number, `true`)
//! - integers are read from the leading digits of the text (`"30min"` -> 30)
//! - text that has no leading digits becomes "not a number" (`None`)

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Magnitudes at or above this are rendered in exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;
/// Non-zero magnitudes below this are rendered in exponent notation
const SMALL_EXPONENT_THRESHOLD: f64 = 1e-6;

// ============================================================================
// Loose Fields
// ============================================================================

/// A body field of unknown type
#[derive(Debug, Clone, PartialEq)]
pub enum LooseField {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl LooseField {
    /// Whether the value counts as supplied
    pub fn is_truthy(&self) -> bool {
        match self {
            LooseField::Text(text) => !text.is_empty(),
            LooseField::Number(n) => *n != 0.0 && !n.is_nan(),
            LooseField::Bool(b) => *b,
        }
    }

    /// Render the value as text
    pub fn as_text(&self) -> String {
        match self {
            LooseField::Text(text) => text.clone(),
            LooseField::Number(n) => number_to_text(*n),
            LooseField::Bool(b) => b.to_string(),
        }
    }

    /// Coerce the value to an integer via its text form
    pub fn to_int(&self) -> Option<i64> {
        parse_int(&self.as_text())
    }
}

impl From<&str> for LooseField {
    fn from(value: &str) -> Self {
        LooseField::Text(value.to_string())
    }
}

impl From<f64> for LooseField {
    fn from(value: f64) -> Self {
        LooseField::Number(value)
    }
}

/// Whether an optional field counts as supplied
pub fn is_present(field: Option<&LooseField>) -> bool {
    field.is_some_and(LooseField::is_truthy)
}

/// Returns the field only when it is truthy
pub fn present(field: Option<&LooseField>) -> Option<&LooseField> {
    field.filter(|f| f.is_truthy())
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= EXPONENT_THRESHOLD || n.abs() < SMALL_EXPONENT_THRESHOLD {
        format!("{:e}", n)
    } else {
        // Shortest round-trip form; integral values print without a fraction
        format!("{}", n)
    }
}

impl Serialize for LooseField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LooseField::Text(text) => serializer.serialize_str(text),
            LooseField::Number(n) => serializer.serialize_f64(*n),
            LooseField::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

struct LooseFieldVisitor;

impl<'de> Visitor<'de> for LooseFieldVisitor {
    type Value = LooseField;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LooseField::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LooseField::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LooseField::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LooseField::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LooseField::Number(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(LooseField::Bool(v))
    }
}

impl<'de> Deserialize<'de> for LooseField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LooseFieldVisitor)
    }
}

// ============================================================================
// Integer Parsing
// ============================================================================

/// Parse the leading integer of a string.
///
/// Leading whitespace and a single sign are accepted, a `0x` prefix selects
/// base 16, and parsing stops at the first character that is not a digit.
/// Returns `None` when no digits were found or the value does not fit `i64`.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (16, rest),
        None => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
