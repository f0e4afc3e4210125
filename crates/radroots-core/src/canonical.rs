//! # Canonical Serialization: Wire Payload Production
//!
//! This module defines `WirePayload`, the sole construction path for the
//! text embedded as the `content` of an outbound signed event.
//!
//! ## Invariant
//!
//! The `WirePayload` newtype has a private inner field. The only way to
//! construct it is through `WirePayload::new()`, which serializes a record
//! to compact JSON. Records declare their optional fields with
//! `skip_serializing_if = "Option::is_none"`, so the encoding rules are:
//!
//! 1. **Declared field order**: struct fields serialize in declaration order.
//! 2. **Absent means omitted**: an absent optional field is never written,
//!    not as `null` and not as an empty placeholder.
//! 3. **Sequence order preserved**: arrays keep element order.
//! 4. **Opaque maps are sorted**: nested raw JSON objects serialize with
//!    serde_json's ordered map, so their key order is stable too.
//! 5. **Compact separators**: no whitespace between tokens.
//!
//! Together these make the encoding a pure function of the normalized
//! record: the same record always produces the same bytes, whatever the
//! field order or extra fields of the payload it was validated from.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Compact JSON text produced from a normalized record.
///
/// # Invariants
///
/// - The only constructor is `WirePayload::new()`.
/// - The text is valid UTF-8 JSON with no insignificant whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WirePayload(String);

impl WirePayload {
    /// Serialize any record into its wire payload.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value's
    /// `Serialize` implementation fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let text = serde_json::to_string(obj)?;
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode the payload back into an untyped value.
    pub fn to_value(&self) -> Result<Value, CanonicalizationError> {
        Ok(serde_json::from_str(&self.0)?)
    }
}

impl AsRef<[u8]> for WirePayload {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for WirePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
