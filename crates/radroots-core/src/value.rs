//! # JSON Kinds and Opaque Values
//!
//! [`JsonKind`] classifies an untyped value for expected-vs-actual
//! reporting. [`OpaqueValue`] holds a value whose structure is
//! interpreted by another layer and is carried here unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The six JSON value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a decoded JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON value accepted without structural constraint.
///
/// Price amounts, quantity values, discount thresholds and event pointers
/// (comment `root`/`parent`) are owned by the domain layer that interprets
/// them. This type keeps them intact so that layer can validate them later,
/// and marks at the type level that nothing about their shape is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueValue(Value);

impl OpaqueValue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the raw value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Kind of the carried value.
    pub fn kind(&self) -> JsonKind {
        JsonKind::of(&self.0)
    }
}

impl From<Value> for OpaqueValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_each_value() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(JsonKind::Boolean.to_string(), "boolean");
        assert_eq!(JsonKind::Object.to_string(), "object");
    }

    #[test]
    fn test_opaque_is_transparent() {
        let raw = json!({"amount": "12.50", "currency": "USD"});
        let opaque = OpaqueValue::new(raw.clone());
        assert_eq!(serde_json::to_value(&opaque).unwrap(), raw);
        assert_eq!(opaque.kind(), JsonKind::Object);
    }

    #[test]
    fn test_opaque_carries_null() {
        let opaque = OpaqueValue::from(Value::Null);
        assert_eq!(serde_json::to_string(&opaque).unwrap(), "null");
    }
}
