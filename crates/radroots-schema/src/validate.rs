//! # Record Validation
//!
//! The entry point tying a kind selector to its catalog shape.
//!
//! ## Trust Boundary
//!
//! Every inbound payload crosses this module before any other component
//! reads it. A payload either becomes a fully typed [`Record`] or is
//! rejected with every field-level violation found, each carrying the
//! path to the offending value. Partial records are never returned.
//!
//! ## Thread Safety
//!
//! `RecordValidator` holds only its options and the catalog is static, so
//! one validator can be shared freely across threads.

use radroots_core::{
    CanonicalizationError, RadrootsError, ValidationError, Violations, WirePayload,
};
use serde_json::Value;

use crate::catalog;
use crate::engine::{Cursor, Shape};
use crate::options::ValidationOptions;
use crate::record::{Record, RecordKind};

/// Validates payloads against the record catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordValidator {
    options: ValidationOptions,
}

impl RecordValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate `payload` as the record named by `kind`.
    ///
    /// # Errors
    ///
    /// - `UnknownRecordKind` if `kind` names no catalog entry. The payload
    ///   is not inspected.
    /// - `Rejected` with every violation otherwise.
    pub fn validate(&self, kind: &str, payload: &Value) -> Result<Record, ValidationError> {
        let kind: RecordKind = kind.parse()?;
        self.validate_kind(kind, payload)
    }

    /// Validate `payload` as a record of `kind`.
    pub fn validate_kind(
        &self,
        kind: RecordKind,
        payload: &Value,
    ) -> Result<Record, ValidationError> {
        let decode = catalog::decoder(kind);
        let result = decode(payload, Cursor::root(&self.options));
        self.conclude(kind.as_str(), result)
    }

    /// Validate `payload` directly into the catalog type `T`.
    ///
    /// ```ignore
    /// let plot: Plot = validator.validate_as(&payload)?;
    /// ```
    pub fn validate_as<T: Shape>(&self, payload: &Value) -> Result<T, ValidationError> {
        let result = T::decode(payload, Cursor::root(&self.options));
        self.conclude(T::NAME, result)
    }

    /// Validate the JSON text carried as an event's `content`.
    ///
    /// # Errors
    ///
    /// `MalformedContent` if `content` is not JSON, then as [`Self::validate`].
    pub fn validate_content(&self, kind: &str, content: &str) -> Result<Record, ValidationError> {
        let kind: RecordKind = kind.parse()?;
        let payload: Value = serde_json::from_str(content).map_err(|e| {
            tracing::debug!(kind = %kind, error = %e, "record content is not JSON");
            ValidationError::MalformedContent {
                kind: kind.as_str().to_string(),
                reason: e.to_string(),
            }
        })?;
        self.validate_kind(kind, &payload)
    }

    /// Validate `payload` and return its canonical wire text.
    ///
    /// Payloads that differ only in member order or undeclared members
    /// normalize to the same text.
    pub fn normalize(&self, kind: &str, payload: &Value) -> Result<WirePayload, RadrootsError> {
        let record = self.validate(kind, payload)?;
        Ok(record.to_payload()?)
    }

    fn conclude<T>(&self, kind: &str, result: Result<T, Violations>) -> Result<T, ValidationError> {
        match result {
            Ok(record) => {
                tracing::trace!(kind = %kind, "record accepted");
                Ok(record)
            }
            Err(violations) => {
                tracing::debug!(
                    kind = %kind,
                    violations = violations.len(),
                    "record rejected"
                );
                Err(ValidationError::Rejected {
                    kind: kind.to_string(),
                    violations,
                })
            }
        }
    }
}

/// Validate with default options. See [`RecordValidator::validate`].
pub fn validate(kind: &str, payload: &Value) -> Result<Record, ValidationError> {
    RecordValidator::default().validate(kind, payload)
}

/// Produce the wire payload for a validated record.
///
/// Feeding the result back through [`validate`] with the same kind yields a
/// record equal to `record`.
pub fn serialize(record: &Record) -> Result<WirePayload, CanonicalizationError> {
    record.to_payload()
}

#[cfg(test)]
mod tests {
    use super::*;
    use radroots_core::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordValidator>();
    }

    #[test]
    fn test_unknown_kind_ignores_payload() {
        let err = validate("zap", &json!(null)).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownRecordKind { ref kind } if kind == "zap"));
    }

    #[test]
    fn test_rejection_names_kind() {
        let err = validate("farm_ref", &json!({"pubkey": "abc"})).unwrap_err();
        match &err {
            ValidationError::Rejected { kind, violations } => {
                assert_eq!(kind, "farm_ref");
                assert_eq!(violations.len(), 1);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(err.has_violation(|v| v.kind == ViolationKind::MissingField));
    }

    #[test]
    fn test_non_object_payload() {
        let err = validate("profile", &json!("alice")).unwrap_err();
        let violations = err.violations().unwrap();
        assert!(violations.violations()[0].path.is_root());
    }

    #[test]
    fn test_validate_as_typed() {
        let validator = RecordValidator::default();
        let farm_ref: catalog::FarmRef = validator
            .validate_as(&json!({"pubkey": "abc", "d_tag": "f1"}))
            .unwrap();
        assert_eq!(farm_ref.d_tag, "f1");
    }

    #[test]
    fn test_validate_content_malformed() {
        let validator = RecordValidator::default();
        let err = validator.validate_content("post", "{not json").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedContent { ref kind, .. } if kind == "post"));
    }

    #[test]
    fn test_validate_content_unknown_kind_first() {
        let validator = RecordValidator::default();
        let err = validator.validate_content("zap", "{not json").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownRecordKind { .. }));
    }

    #[test]
    fn test_normalize_strips_and_orders() {
        let validator = RecordValidator::default();
        let wire = validator
            .normalize("farm_ref", &json!({"d_tag": "f1", "x": 1, "pubkey": "abc"}))
            .unwrap();
        assert_eq!(wire.as_str(), r#"{"pubkey":"abc","d_tag":"f1"}"#);
    }

    #[test]
    fn test_normalize_wraps_rejection() {
        let validator = RecordValidator::default();
        let err = validator.normalize("farm_ref", &json!({})).unwrap_err();
        assert!(matches!(
            err,
            RadrootsError::Validation(ValidationError::Rejected { .. })
        ));
    }

    #[test]
    fn test_validate_content_parses_then_validates() {
        let validator = RecordValidator::default();
        let record = validator
            .validate_content("post", r#"{"content":"gm","extra":true}"#)
            .unwrap();
        assert_eq!(serialize(&record).unwrap().as_str(), r#"{"content":"gm"}"#);
    }
}
