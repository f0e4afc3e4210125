//! Sequence and object validators.
//!
//! Every record shape in the catalog is an object read through
//! [`ObjectReader`], usually via the [`decode_object!`] macro:
//!
//! ```ignore
//! impl Shape for FarmRef {
//!     const NAME: &'static str = "farm_ref";
//!
//!     fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
//!         decode_object!(value, at => FarmRef {
//!             pubkey: required(Text),
//!             d_tag: required(Text),
//!         })
//!     }
//! }
//! ```
//!
//! The macro reads every declared field, collects every failure, applies
//! the unknown-field policy, and only then builds the struct.

use std::marker::PhantomData;

use radroots_core::{Arity, JsonKind, Violation, ViolationKind, Violations};
use serde_json::{Map, Value};

use super::{Cursor, Validated, Validator};
use crate::options::{NullPolicy, UnknownFieldPolicy};

/// Validate each element of `items` with `validator`, keeping order.
pub(crate) fn validate_elements<V: Validator>(
    validator: &V,
    items: &[Value],
    at: Cursor<'_>,
) -> Validated<Vec<V::Output>> {
    let mut out = Vec::with_capacity(items.len());
    let mut violations = Violations::new();
    for (i, item) in items.iter().enumerate() {
        if let Some(element) = violations.absorb(validator.validate(item, at.index(i))) {
            out.push(element);
        }
    }
    violations.into_result().map(|()| out)
}

/// A homogeneous array. Empty arrays are accepted.
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V>(pub V);

impl<V: Validator> Validator for ArrayOf<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Self::Output> {
        match value {
            Value::Array(items) => validate_elements(&self.0, items, at),
            other => Err(at.mismatch(JsonKind::Array, other)),
        }
    }
}

/// A homogeneous array with at least one element.
#[derive(Debug, Clone, Copy)]
pub struct NonEmpty<V>(pub V);

impl<V: Validator> Validator for NonEmpty<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Self::Output> {
        let Value::Array(items) = value else {
            return Err(at.mismatch(JsonKind::Array, value));
        };
        if items.is_empty() {
            return Err(at.fail(ViolationKind::ArityMismatch {
                expected: Arity::AtLeast(1),
                actual: 0,
            }));
        }
        validate_elements(&self.0, items, at)
    }
}

/// A Rust type with a structural validator of its own.
pub trait Shape: Sized {
    /// Snake-case name used in rejection reports.
    const NAME: &'static str;

    /// Validate `value` and build the normalized record.
    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self>;
}

/// Adapts a [`Shape`] into a [`Validator`].
pub struct ShapeOf<T>(PhantomData<fn() -> T>);

/// Validator for the shape `T`.
pub fn shape<T: Shape>() -> ShapeOf<T> {
    ShapeOf(PhantomData)
}

impl<T: Shape> Validator for ShapeOf<T> {
    type Output = T;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<T> {
        T::decode(value, at)
    }
}

/// Reads the members of one JSON object against a declared field list.
///
/// Each `required`/`optional`/`declare` call records the field name. Once
/// every field has been read, [`ObjectReader::finish`] applies the
/// unknown-field policy to whatever was not declared.
pub struct ObjectReader<'v, 'c> {
    members: &'v Map<String, Value>,
    at: Cursor<'c>,
    declared: Vec<&'static str>,
}

impl<'v, 'c> ObjectReader<'v, 'c> {
    /// Fails with `TypeMismatch` unless `value` is an object.
    pub fn open(value: &'v Value, at: Cursor<'c>) -> Validated<Self> {
        match value {
            Value::Object(members) => Ok(Self {
                members,
                at,
                declared: Vec::new(),
            }),
            other => Err(at.mismatch(JsonKind::Object, other)),
        }
    }

    /// A field that must be present.
    pub fn required<V: Validator>(
        &mut self,
        name: &'static str,
        validator: &V,
    ) -> Validated<V::Output> {
        self.declared.push(name);
        let at = self.at.key(name);
        match self.members.get(name) {
            Some(value) => validator.validate(value, at),
            None => Err(at.fail(ViolationKind::MissingField)),
        }
    }

    /// A field that may be absent. Absence skips the validator entirely.
    pub fn optional<V: Validator>(
        &mut self,
        name: &'static str,
        validator: &V,
    ) -> Validated<Option<V::Output>> {
        self.declared.push(name);
        let at = self.at.key(name);
        match self.members.get(name) {
            None => Ok(None),
            Some(Value::Null) if at.options().null_optionals == NullPolicy::TreatAsAbsent => {
                Ok(None)
            }
            Some(value) => validator.validate(value, at).map(Some),
        }
    }

    /// Mark a field as declared without reading it (e.g. a union discriminant).
    pub fn declare(&mut self, name: &'static str) {
        self.declared.push(name);
    }

    /// Apply the unknown-field policy to every undeclared member.
    pub fn finish(self) -> Validated<()> {
        let mut violations = Violations::new();
        for key in self.members.keys() {
            if self.declared.iter().any(|d| key.as_str() == *d) {
                continue;
            }
            let at = self.at.key(key);
            match at.options().unknown_fields {
                UnknownFieldPolicy::Strip => {
                    tracing::trace!(path = %at.path(), "stripped undeclared field");
                }
                UnknownFieldPolicy::Reject => {
                    violations.push(Violation::new(at.path(), ViolationKind::UnexpectedField));
                }
            }
        }
        violations.into_result()
    }
}

/// Decode an object into a struct whose fields are all read through
/// [`ObjectReader`]. See the module docs.
///
/// A field's wire name is its identifier unless given with `as`, e.g.
/// `r#type as "type": required(Text)`.
macro_rules! decode_object {
    (@wire $field:ident) => {
        stringify!($field)
    };
    (@wire $field:ident $wire:literal) => {
        $wire
    };
    ($value:expr, $at:expr => $ty:ident {
        $($field:ident $(as $wire:literal)?: $mode:ident($validator:expr)),+ $(,)?
    }) => {{
        let mut object = $crate::engine::ObjectReader::open($value, $at)?;
        let mut violations = $crate::Violations::new();
        $(
            let $field = violations.absorb(
                object.$mode(decode_object!(@wire $field $($wire)?), &$validator),
            );
        )+
        if let Err(undeclared) = object.finish() {
            violations.append(undeclared);
        }
        match ($($field,)+) {
            ($(Some($field),)+) if violations.is_empty() => Ok($ty { $($field),+ }),
            _ => Err(violations),
        }
    }};
}

pub(crate) use decode_object;
