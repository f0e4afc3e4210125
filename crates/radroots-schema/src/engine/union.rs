//! Tagged unions discriminated by a literal field.
//!
//! The discriminant is read first and on its own. If it names a registered
//! variant, only that variant's decoder runs against the object; fields
//! that would be valid under a sibling variant are never considered.

use radroots_core::{JsonKind, ViolationKind, Violations};
use serde_json::Value;

use super::composite::{shape, ObjectReader, Shape};
use super::{Cursor, Validated, Validator};

/// Decoder for one variant of a union producing `T`.
pub type VariantDecoder<T> = fn(&Value, Cursor<'_>) -> Validated<T>;

/// One registered variant: its literal tag and its decoder.
pub struct Variant<T: 'static> {
    pub tag: &'static str,
    pub decode: VariantDecoder<T>,
}

/// A closed union of object shapes selected by `discriminant`.
pub struct TaggedUnion<T: 'static> {
    /// Name of the discriminant field, e.g. `"kind"`.
    pub discriminant: &'static str,
    /// Registered variants, in the order reported on failure.
    pub variants: &'static [Variant<T>],
}

impl<T: 'static> TaggedUnion<T> {
    /// Literal tags accepted by this union.
    pub fn tags(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.tag).collect()
    }

    fn variant(&self, tag: &str) -> Option<&'static Variant<T>> {
        self.variants.iter().find(|v| v.tag == tag)
    }
}

impl<T: 'static> Validator for TaggedUnion<T> {
    type Output = T;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<T> {
        let Value::Object(members) = value else {
            return Err(at.mismatch(JsonKind::Object, value));
        };
        let tag_at = at.key(self.discriminant);
        let tag = match members.get(self.discriminant) {
            Some(Value::String(tag)) => tag,
            Some(other) => return Err(tag_at.mismatch(JsonKind::String, other)),
            None => return Err(tag_at.fail(ViolationKind::MissingField)),
        };
        match self.variant(tag) {
            Some(variant) => (variant.decode)(value, at),
            None => Err(tag_at.fail(ViolationKind::UnrecognizedVariant {
                found: tag.clone(),
                expected: self.tags(),
            })),
        }
    }
}

/// Decode an adjacently tagged variant: `{ <tag>: "...", <content>: A }`.
///
/// The tag field is declared but not re-read; [`TaggedUnion`] has already
/// matched it. The content object is validated as `A` and wrapped.
pub fn decode_adjacent<A: Shape, T>(
    value: &Value,
    at: Cursor<'_>,
    tag: &'static str,
    content: &'static str,
    wrap: fn(A) -> T,
) -> Validated<T> {
    let mut object = ObjectReader::open(value, at)?;
    object.declare(tag);
    let mut violations = Violations::new();
    let payload = violations.absorb(object.required(content, &shape::<A>()));
    if let Err(undeclared) = object.finish() {
        violations.append(undeclared);
    }
    match payload {
        Some(payload) if violations.is_empty() => Ok(wrap(payload)),
        _ => Err(violations),
    }
}
