//! # Validation Engine
//!
//! A validator is a pure function from an untyped JSON value to either a
//! normalized value of the validator's declared shape or the complete set
//! of [`Violations`] found in it. Composite validators run every child and
//! merge the failures; none of them stop at the first problem.
//!
//! ## Building blocks
//!
//! - [`primitive`]: scalars: [`Text`], [`Numeric`], [`Literal`],
//!   [`Opaque`], and the fixed-arity [`Tuple`].
//! - [`composite`]: [`ArrayOf`], [`NonEmpty`], the [`ObjectReader`] used
//!   by every record shape, and the [`Shape`] trait tying a Rust type to
//!   its validator.
//! - [`union`]: [`TaggedUnion`], discriminated by a literal field.
//!
//! Paths are tracked by a [`Cursor`] that borrows its parent on the stack.
//! A [`FieldPath`] is only allocated when a violation is reported.

pub mod composite;
pub mod primitive;
pub mod union;

use radroots_core::{FieldPath, JsonKind, PathSegment, ViolationKind, Violations};
use serde_json::Value;

use crate::options::ValidationOptions;

pub use composite::{shape, ArrayOf, NonEmpty, ObjectReader, Shape, ShapeOf};
pub use primitive::{Literal, Numeric, Opaque, Text, Tuple};
pub use union::{decode_adjacent, TaggedUnion, Variant, VariantDecoder};

/// Outcome of running a validator.
pub type Validated<T> = Result<T, Violations>;

/// A structural validator.
///
/// Implementations must be pure: no I/O, no shared mutable state. The
/// output depends only on `value` and the options carried by `at`.
pub trait Validator {
    /// Normalized value produced on success.
    type Output;

    /// Validate `value`, located at `at`.
    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Self::Output>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;

    fn validate(&self, value: &Value, at: Cursor<'_>) -> Validated<Self::Output> {
        (**self).validate(value, at)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// Position of the value being validated, plus the run's options.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    options: &'a ValidationOptions,
    parent: Option<&'a Cursor<'a>>,
    step: Step<'a>,
}

impl<'a> Cursor<'a> {
    /// Cursor at the payload root.
    pub fn root(options: &'a ValidationOptions) -> Self {
        Self {
            options,
            parent: None,
            step: Step::Root,
        }
    }

    /// Child cursor for an object member.
    pub fn key<'b>(&'b self, name: &'b str) -> Cursor<'b> {
        Cursor {
            options: self.options,
            parent: Some(self),
            step: Step::Key(name),
        }
    }

    /// Child cursor for an array element.
    pub fn index<'b>(&'b self, index: usize) -> Cursor<'b> {
        Cursor {
            options: self.options,
            parent: Some(self),
            step: Step::Index(index),
        }
    }

    pub fn options(&self) -> &'a ValidationOptions {
        self.options
    }

    /// Materialize the path from the root to this cursor.
    pub fn path(&self) -> FieldPath {
        let mut segments = Vec::new();
        let mut cursor: Option<&Cursor<'_>> = Some(self);
        while let Some(current) = cursor {
            match current.step {
                Step::Key(name) => segments.push(PathSegment::Key(name.to_string())),
                Step::Index(i) => segments.push(PathSegment::Index(i)),
                Step::Root => {}
            }
            cursor = current.parent;
        }
        segments.reverse();
        FieldPath::from_segments(segments)
    }

    /// A single violation at this position.
    pub fn fail(&self, kind: ViolationKind) -> Violations {
        Violations::single(self.path(), kind)
    }

    /// A `TypeMismatch` at this position.
    pub fn mismatch(&self, expected: JsonKind, found: &Value) -> Violations {
        self.fail(ViolationKind::TypeMismatch {
            expected,
            actual: JsonKind::of(found),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_path_materializes_in_order() {
        let options = ValidationOptions::default();
        let root = Cursor::root(&options);
        let polygon = root.key("polygon");
        let coords = polygon.key("coordinates");
        let ring = coords.index(0);
        let pair = ring.index(4);
        assert_eq!(pair.path().to_string(), "/polygon/coordinates/0/4");
        assert!(root.path().is_root());
    }

    #[test]
    fn test_mismatch_reports_actual_kind() {
        let options = ValidationOptions::default();
        let root = Cursor::root(&options);
        let at = root.key("name");
        let violations = at.mismatch(JsonKind::String, &Value::Bool(true));
        let violation = &violations.violations()[0];
        assert_eq!(violation.path.to_string(), "/name");
        assert_eq!(
            violation.kind,
            ViolationKind::TypeMismatch {
                expected: JsonKind::String,
                actual: JsonKind::Boolean,
            }
        );
    }
}
