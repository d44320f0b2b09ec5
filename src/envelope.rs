//! The whole-document signature envelope.

use crate::error::{Result, SignError};
use serde::{Deserialize, Serialize};

/// A signed container holding the original document text plus its
/// signature.
///
/// Serializes as a JSON object with exactly two fields, `Data` and
/// `Signature`. `Data` is the signed document text byte-for-byte; it is
/// never re-serialized, so whitespace and field order survive the
/// round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedEnvelope {
    /// The original serialized document, verbatim.
    #[serde(rename = "Data")]
    pub data: String,

    /// The PKCS#1 v1.5 signature over the SHA-256 digest of `Data`,
    /// base64 encoded.
    #[serde(rename = "Signature")]
    pub signature: String,
}

impl SignedEnvelope {
    /// Build an envelope from document text and raw signature bytes.
    pub fn new<S: Into<String>>(data: S, signature: &[u8]) -> Self {
        use base64::Engine;
        Self {
            data: data.into(),
            signature: base64::engine::general_purpose::STANDARD.encode(signature),
        }
    }

    /// Parse an envelope from a JSON string.
    ///
    /// A structurally invalid envelope (missing field, extra field, wrong
    /// type) fails with [`SignError::MalformedEnvelope`] so callers can
    /// tell corrupt structure apart from a tampered signature.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SignError::MalformedEnvelope(e.to_string()))
    }

    /// Serialize the envelope to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Decode the base64 signature field.
    ///
    /// Invalid base64 is structural corruption and fails with
    /// [`SignError::MalformedEnvelope`].
    pub fn decode_signature(&self) -> Result<Vec<u8>> {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD
            .decode(&self.signature)
            .map_err(|e| SignError::MalformedEnvelope(format!("invalid base64 signature: {e}")))
    }
}
