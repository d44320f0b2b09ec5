//! Document signing: whole-document envelopes and element-wise field
//! signatures.

use crate::document::Document;
use crate::envelope::SignedEnvelope;
use crate::error::{Result, SignError};
use crate::hash::hash_text;
use crate::keys::KeyPair;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

/// Signs documents with a borrowed key pair.
#[derive(Debug)]
pub struct Signer<'a> {
    keypair: &'a KeyPair,
}

impl<'a> Signer<'a> {
    /// Create a new signer with the given key pair.
    pub fn new(keypair: &'a KeyPair) -> Self {
        Self { keypair }
    }

    /// Sign serialized document text as a whole.
    ///
    /// The envelope stores the input text verbatim; no re-serialization
    /// happens between hashing and storage.
    pub fn sign_text(&self, document_text: &str) -> Result<SignedEnvelope> {
        let digest = hash_text(document_text);
        let signature = self.keypair.sign_digest(&digest)?;
        debug!(digest = %digest.to_hex(), "signed document text");
        Ok(SignedEnvelope::new(document_text, &signature))
    }

    /// Serialize a document compactly and sign that exact serialization.
    pub fn sign_document(&self, document: &Document) -> Result<SignedEnvelope> {
        let text = document.to_json()?;
        self.sign_text(&text)
    }

    /// Sign selected fields of a document, one signature field per
    /// requested field.
    ///
    /// For each name in `fields`, in order: a field absent from the
    /// document is silently skipped, so optional fields can be requested
    /// without error; a present field gets a sibling `name + "_signature"`
    /// field holding the base64 signature of its canonical text, appended
    /// to the returned copy. The input document is not mutated, and a
    /// failed call returns no partial output.
    ///
    /// Fails with [`SignError::InvalidArgument`] if a requested name is
    /// itself a signature field name, and with
    /// [`SignError::SignatureCollision`] if the document already contains
    /// the signature field for a requested present field.
    pub fn sign_elements<S: AsRef<str>>(
        &self,
        document: &Document,
        fields: &[S],
    ) -> Result<Document> {
        let mut signed = document.clone();

        for name in fields {
            let name = name.as_ref();
            if Document::is_signature_field(name) {
                return Err(SignError::InvalidArgument(format!(
                    "cannot sign signature field {name:?}"
                )));
            }

            let Some(text) = document.field_text(name) else {
                debug!(field = name, "field absent, skipping");
                continue;
            };

            let signature_field = Document::signature_field(name);
            if document.contains(&signature_field) {
                return Err(SignError::SignatureCollision(signature_field));
            }

            let digest = hash_text(&text);
            let signature = self.keypair.sign_digest(&digest)?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(signature);
            debug!(field = name, digest = %digest.to_hex(), "signed field");
            signed.insert(signature_field, Value::String(encoded));
        }

        Ok(signed)
    }
}

/// Convenience function to sign document text with a key pair.
pub fn sign_text(keypair: &KeyPair, document_text: &str) -> Result<SignedEnvelope> {
    Signer::new(keypair).sign_text(document_text)
}

/// Convenience function to sign selected fields with a key pair.
pub fn sign_elements<S: AsRef<str>>(
    keypair: &KeyPair,
    document: &Document,
    fields: &[S],
) -> Result<Document> {
    Signer::new(keypair).sign_elements(document, fields)
}
