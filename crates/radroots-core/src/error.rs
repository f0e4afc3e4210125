//! # Error Types: Structured Violation Taxonomy
//!
//! Defines the errors returned by record validation and canonical
//! serialization. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Every failure is returned as data. Nothing here is fatal.
//! - Field-level failures carry the JSON Pointer path of the offending
//!   value and the expected vs actual kind.
//! - Composite validators accumulate every child failure into a single
//!   [`Violations`] collection so a caller sees all problems in one pass.

use std::fmt;

use thiserror::Error;

use crate::path::FieldPath;
use crate::value::JsonKind;

/// Top-level error type for the record-schema crates.
#[derive(Error, Debug)]
pub enum RadrootsError {
    /// A payload was rejected during validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A validated record could not be written back to the wire.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Failure to validate a payload as a record.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The record-kind selector is not in the catalog.
    #[error("unknown record kind '{kind}'")]
    UnknownRecordKind {
        /// The selector as supplied by the caller.
        kind: String,
    },

    /// The payload does not conform to the record's shape.
    #[error("record '{kind}' rejected with {} violation(s):\n{violations}", .violations.len())]
    Rejected {
        /// Record kind the payload was validated against.
        kind: String,
        /// Every field-level failure found.
        violations: Violations,
    },

    /// Event content could not be decoded as JSON.
    #[error("malformed content for record '{kind}': {reason}")]
    MalformedContent {
        /// Record kind the content was meant to hold.
        kind: String,
        /// Decoder error message.
        reason: String,
    },
}

impl ValidationError {
    /// Field-level violations, when the error carries any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Rejected { violations, .. } => Some(violations),
            _ => None,
        }
    }

    /// Returns true if any carried violation satisfies `pred`.
    pub fn has_violation(&self, pred: impl Fn(&Violation) -> bool) -> bool {
        self.violations()
            .is_some_and(|v| v.iter().any(|violation| pred(violation)))
    }
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Expected length of a fixed or bounded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many elements.
    Exactly(usize),
    /// This many elements or more.
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// What went wrong at a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is absent.
    MissingField,

    /// The value is of the wrong JSON kind.
    TypeMismatch {
        /// Kind the schema declares.
        expected: JsonKind,
        /// Kind found in the payload.
        actual: JsonKind,
    },

    /// A discriminant or literal tag is outside the closed set.
    UnrecognizedVariant {
        /// The offending value.
        found: String,
        /// The accepted literals, in registration order.
        expected: Vec<&'static str>,
    },

    /// A sequence has the wrong number of elements.
    ArityMismatch {
        /// Length the schema declares.
        expected: Arity,
        /// Length found in the payload.
        actual: usize,
    },

    /// A field the schema does not declare, under the reject policy.
    UnexpectedField,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => f.write_str("missing required field"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected {expected}, found {actual}")
            }
            Self::UnrecognizedVariant { found, expected } => {
                write!(f, "unrecognized variant \"{found}\" (expected one of: {})", expected.join(", "))
            }
            Self::ArityMismatch { expected, actual } => {
                write!(f, "expected {expected} element(s), found {actual}")
            }
            Self::UnexpectedField => f.write_str("field is not declared by the schema"),
        }
    }
}

/// A single validation failure with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating value.
    pub path: FieldPath,
    /// Failure description.
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "  (root): {}", self.kind)
        } else {
            write!(f, "  {}: {}", self.path, self.kind)
        }
    }
}

/// Ordered collection of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding exactly one failure.
    pub fn single(path: FieldPath, kind: ViolationKind) -> Self {
        Self {
            violations: vec![Violation::new(path, kind)],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append every failure from `other`, keeping order.
    pub fn append(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Keep the success value, or record the failures and return `None`.
    ///
    /// Lets a composite validator run every child before deciding whether
    /// it succeeded.
    pub fn absorb<T>(&mut self, result: Result<T, Violations>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violations) => {
                self.append(violations);
                None
            }
        }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl Extend<Violation> for Violations {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
