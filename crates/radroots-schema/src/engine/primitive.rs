//! Scalar validators and the fixed-arity tuple.

use radroots_core::{Arity, JsonKind, Number, OpaqueValue, ViolationKind};
use serde_json::Value;

use super::composite::validate_elements;
use super::{Cursor, Validated, Validator};

/// Any JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Validator for Text {
    type Output = String;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(at.mismatch(JsonKind::String, other)),
        }
    }
}

/// Any JSON number, kept in its original integer or float form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Validator for Numeric {
    type Output = Number;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Number> {
        match value {
            Value::Number(n) => Ok(n.clone()),
            other => Err(at.mismatch(JsonKind::Number, other)),
        }
    }
}

/// A string that must equal one fixed tag.
#[derive(Debug, Clone, Copy)]
pub struct Literal(pub &'static str);

impl Validator for Literal {
    type Output = &'static str;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<&'static str> {
        match value {
            Value::String(s) if s == self.0 => Ok(self.0),
            Value::String(s) => Err(at.fail(ViolationKind::UnrecognizedVariant {
                found: s.clone(),
                expected: vec![self.0],
            })),
            other => Err(at.mismatch(JsonKind::String, other)),
        }
    }
}

/// Accepts any value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Opaque;

impl Validator for Opaque {
    type Output = OpaqueValue;

    fn validate(&self, value: &Value, _at: Cursor<'_>) -> Validated<OpaqueValue> {
        Ok(OpaqueValue::new(value.clone()))
    }
}

/// An array of exactly `N` elements, each checked by the inner validator.
///
/// Longer and shorter arrays are both rejected with `ArityMismatch`; there
/// is no truncation or padding.
#[derive(Debug, Clone, Copy)]
pub struct Tuple<V, const N: usize>(pub V);

impl<V: Validator, const N: usize> Validator for Tuple<V, N> {
    type Output = [V::Output; N];

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Self::Output> {
        let Value::Array(items) = value else {
            return Err(at.mismatch(JsonKind::Array, value));
        };
        if items.len() != N {
            return Err(at.fail(ViolationKind::ArityMismatch {
                expected: Arity::Exactly(N),
                actual: items.len(),
            }));
        }
        let elements = validate_elements(&self.0, items, at)?;
        <[V::Output; N]>::try_from(elements).map_err(|rest| {
            at.fail(ViolationKind::ArityMismatch {
                expected: Arity::Exactly(N),
                actual: rest.len(),
            })
        })
    }
}
