//! Signature verification: whole-document envelopes and element-wise
//! field reports.

use crate::document::{canonical_text, Document};
use crate::envelope::SignedEnvelope;
use crate::error::Result;
use crate::hash::hash_text;
use crate::keys::PublicKey;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

/// Outcome of checking a single document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// The field had a signature and it verified.
    Valid,
    /// The field had a signature and it did not verify, or the signature
    /// was malformed.
    Invalid,
    /// The field had no signature and was not checked.
    Unsigned,
}

/// Result of checking one document field.
#[derive(Debug, Clone)]
pub struct FieldResult {
    /// The field name.
    pub field: String,

    /// Whether the field verified, failed, or was unsigned.
    pub status: FieldStatus,

    /// Error detail when a signature was present but malformed.
    pub error: Option<String>,
}

/// Result of element-wise verification over a whole document.
#[derive(Debug)]
pub struct ElementReport {
    /// Whether every field that had a signature verified. A document with
    /// zero signed fields is vacuously valid.
    pub all_valid: bool,

    /// One result per payload field, in document order. Signature fields
    /// themselves are metadata and do not appear.
    pub fields: Vec<FieldResult>,
}

impl ElementReport {
    /// Get the number of fields that verified.
    pub fn valid_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.status == FieldStatus::Valid)
            .count()
    }

    /// Get the number of fields that failed verification.
    pub fn invalid_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.status == FieldStatus::Invalid)
            .count()
    }

    /// Get the number of fields that carried no signature.
    pub fn unsigned_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.status == FieldStatus::Unsigned)
            .count()
    }

    /// Look up the result for a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.field == name)
    }
}

/// Verifier for document signatures.
pub struct Verifier;

impl Verifier {
    /// Verify a whole-document envelope.
    ///
    /// Fails with [`crate::SignError::MalformedEnvelope`] if the stored
    /// signature is not valid base64; a well-formed envelope whose
    /// signature does not match returns `Ok(false)`.
    pub fn verify_envelope(envelope: &SignedEnvelope, key: &PublicKey) -> Result<bool> {
        let signature = envelope.decode_signature()?;
        let digest = hash_text(&envelope.data);
        Ok(key.verify_digest(&digest, &signature))
    }

    /// Parse and verify a whole-document envelope from JSON.
    pub fn verify_envelope_json(json: &str, key: &PublicKey) -> Result<bool> {
        let envelope = SignedEnvelope::from_json(json)?;
        Self::verify_envelope(&envelope, key)
    }

    /// Verify the signed fields of a document, reporting per field.
    ///
    /// Fields are checked in stored order. Signature fields are skipped as
    /// metadata; a field with no signature sibling is reported
    /// [`FieldStatus::Unsigned`] and does not affect the outcome. A
    /// malformed signature marks its field invalid and checking continues
    /// with the remaining fields.
    pub fn verify_elements(document: &Document, key: &PublicKey) -> ElementReport {
        let mut fields = Vec::new();
        let mut all_valid = true;

        for (name, value) in document.iter() {
            if Document::is_signature_field(name) {
                continue;
            }

            let signature_field = Document::signature_field(name);
            let Some(signature_value) = document.get(&signature_field) else {
                debug!(field = %name, "field unsigned, skipping");
                fields.push(FieldResult {
                    field: name.clone(),
                    status: FieldStatus::Unsigned,
                    error: None,
                });
                continue;
            };

            let (status, error) = Self::check_field(name, value, signature_value, key);
            if status == FieldStatus::Invalid {
                all_valid = false;
            }
            fields.push(FieldResult {
                field: name.clone(),
                status,
                error,
            });
        }

        ElementReport { all_valid, fields }
    }

    fn check_field(
        name: &str,
        value: &Value,
        signature_value: &Value,
        key: &PublicKey,
    ) -> (FieldStatus, Option<String>) {
        let Some(signature_b64) = signature_value.as_str() else {
            return (
                FieldStatus::Invalid,
                Some("signature field is not a string".to_string()),
            );
        };

        let signature = match base64::engine::general_purpose::STANDARD.decode(signature_b64) {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    FieldStatus::Invalid,
                    Some(format!("invalid base64 signature: {e}")),
                );
            }
        };

        let digest = hash_text(&canonical_text(value));
        debug!(field = name, digest = %digest.to_hex(), "verifying field");
        if key.verify_digest(&digest, &signature) {
            (FieldStatus::Valid, None)
        } else {
            (FieldStatus::Invalid, None)
        }
    }
}

/// Convenience function to verify a whole-document envelope.
pub fn verify_envelope(envelope: &SignedEnvelope, key: &PublicKey) -> Result<bool> {
    Verifier::verify_envelope(envelope, key)
}

/// Convenience function to verify the signed fields of a document.
pub fn verify_elements(document: &Document, key: &PublicKey) -> ElementReport {
    Verifier::verify_elements(document, key)
}
