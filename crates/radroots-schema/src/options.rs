//! # Validator Options
//!
//! Tunable policies for edge cases the record catalog does not pin down.
//! The defaults accept forward-compatible producers (extra fields are
//! dropped) while keeping `null` distinct from an absent field.

use serde::{Deserialize, Serialize};

/// What to do with object members the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Drop them from the normalized record.
    #[default]
    Strip,
    /// Report each one as `UnexpectedField`.
    Reject,
}

/// How an explicit `null` is treated for an optional field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// `null` is a value of the wrong kind.
    #[default]
    Reject,
    /// `null` counts as the field being absent.
    TreatAsAbsent,
}

/// Options shared by every validator in a validation run.
///
/// Deserializable with every field defaulted, so a host application can
/// embed it in its own configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Policy for undeclared object members.
    pub unknown_fields: UnknownFieldPolicy,
    /// Policy for `null` in optional fields.
    pub null_optionals: NullPolicy,
}

impl ValidationOptions {
    /// Reject undeclared fields and `null` optionals.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
            null_optionals: NullPolicy::Reject,
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_null_optionals(mut self, policy: NullPolicy) -> Self {
        self.null_optionals = policy;
        self
    }
}
