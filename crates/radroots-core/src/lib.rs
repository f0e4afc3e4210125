//! # radroots-core: Foundational Types for Record Schemas
//!
//! This crate is the leaf of the Radroots record-schema workspace. It defines
//! the vocabulary every validator speaks: where a failure happened, what kind
//! of failure it was, and how a validated record is written back to the wire.
//!
//! ## Key Design Principles
//!
//! 1. **Failures are data.** A [`Violation`] carries the [`FieldPath`] of the
//!    offending value and a [`ViolationKind`] describing expected vs actual.
//!    Validators accumulate them into [`Violations`] instead of stopping at
//!    the first problem.
//!
//! 2. **Opaque values are explicit.** Fields whose structure belongs to a
//!    different layer (price amounts, comment roots) are held in
//!    [`OpaqueValue`], never in an unconstrained `serde_json::Value` field.
//!
//! 3. **`WirePayload` newtype.** Outbound event content flows through
//!    `WirePayload::new()`. Absent optional fields are omitted and field
//!    order follows the record declaration.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `radroots-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod path;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use canonical::WirePayload;
pub use error::{
    Arity, CanonicalizationError, RadrootsError, ValidationError, Violation, ViolationKind,
    Violations,
};
pub use path::{FieldPath, PathSegment};
pub use serde_json::Number;
pub use value::{JsonKind, OpaqueValue};
