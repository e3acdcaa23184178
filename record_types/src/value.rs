//! Field values
//!
//! A value is one of a small set of JSON scalars. The JSON shape is untagged,
//! so stored records stay plain `{"name": value}` objects.

use crate::FieldKind;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Value of a single record field
///
/// Arrays and objects match no variant, so nested values fail to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text, Dropdown, Checkboxes and RadioGroup fields
    Text(String),
    /// Number fields
    Number(Number),
    /// Checkbox fields
    Bool(bool),
    /// Explicit JSON `null` from stored input
    Null,
}

impl FieldValue {
    /// Creates a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Creates an integer value
    pub fn integer(value: i64) -> Self {
        FieldValue::Number(Number::from(value))
    }

    /// Returns true if the field counts as not filled in
    ///
    /// Absent fields are handled by the caller. `Null`, the empty string,
    /// numeric zero and `false` are all unset, so an empty Text field and a
    /// missing one are treated the same.
    pub fn is_unset(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(n) => n.as_f64().map_or(false, |v| v == 0.0),
            FieldValue::Bool(b) => !*b,
        }
    }

    /// Tries to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Tries to get as number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Tries to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::integer(n)
    }
}

/// Returns the value an unset field of the given kind is filled with
pub fn default_for(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::Number => FieldValue::integer(0),
        FieldKind::Checkbox => FieldValue::Bool(false),
        FieldKind::Text | FieldKind::Dropdown | FieldKind::Checkboxes | FieldKind::RadioGroup => {
            FieldValue::Text(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_table() {
        assert_eq!(default_for(FieldKind::Checkbox), FieldValue::Bool(false));
        assert_eq!(default_for(FieldKind::Number), FieldValue::integer(0));
        assert_eq!(default_for(FieldKind::Text), FieldValue::text(""));
        assert_eq!(default_for(FieldKind::Dropdown), default_for(FieldKind::Text));
        assert_eq!(default_for(FieldKind::Checkboxes), default_for(FieldKind::Text));
        assert_eq!(default_for(FieldKind::RadioGroup), default_for(FieldKind::Text));
    }

    #[test]
    fn test_defaults_are_unset() {
        for kind in FieldKind::ALL {
            assert!(default_for(kind).is_unset(), "default for {} should be unset", kind);
        }
    }

    #[test]
    fn test_is_unset() {
        assert!(FieldValue::Null.is_unset());
        assert!(FieldValue::text("").is_unset());
        assert!(FieldValue::integer(0).is_unset());
        assert!(FieldValue::Bool(false).is_unset());
        assert!(FieldValue::Number(Number::from_f64(0.0).unwrap()).is_unset());

        assert!(!FieldValue::text("x").is_unset());
        assert!(!FieldValue::text("0").is_unset());
        assert!(!FieldValue::integer(-1).is_unset());
        assert!(!FieldValue::Bool(true).is_unset());
    }

    #[test]
    fn test_json_shape_is_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::text("x")).unwrap(), "\"x\"");
        assert_eq!(serde_json::to_string(&FieldValue::integer(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&FieldValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&FieldValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_deserialize_scalars() {
        let v: FieldValue = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(v, FieldValue::text("hi"));
        let v: FieldValue = serde_json::from_str("-3").unwrap();
        assert_eq!(v, FieldValue::integer(-3));
        let v: FieldValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.as_number().and_then(|n| n.as_f64()), Some(2.5));
        let v: FieldValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, FieldValue::Bool(false));
        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, FieldValue::Null);
    }

    #[test]
    fn test_deserialize_rejects_nested() {
        assert!(serde_json::from_str::<FieldValue>("[1,2]").is_err());
        assert!(serde_json::from_str::<FieldValue>("{\"a\":1}").is_err());
    }

    #[test]
    fn test_large_unsigned_round_trips() {
        let v: FieldValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(v, FieldValue::Number(Number::from(u64::MAX)));
        assert_eq!(serde_json::to_string(&v).unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_float_keeps_format() {
        let v: FieldValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "2.5");
    }
}
