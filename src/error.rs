//! Error types for the json-sign library.

use thiserror::Error;

/// The main error type for json-sign operations.
#[derive(Error, Debug)]
pub enum SignError {
    /// Error with JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with base64 encoding/decoding.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The underlying RSA primitive refused to sign or verify.
    #[error("Crypto failure: {0}")]
    Crypto(#[from] rsa::Error),

    /// Error decoding a PKCS#8 private key.
    #[error("Invalid private key encoding: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    /// Error decoding an SPKI public key.
    #[error("Invalid public key encoding: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    /// A dynamically invalid input, such as a signature-suffix field name
    /// in a signing request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A signed envelope is structurally invalid (missing field, bad
    /// base64, not an object).
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Signing a field would collide with an existing field of the
    /// document.
    #[error("Signature field collision: document already contains {0:?}")]
    SignatureCollision(String),

    /// The top level of a parsed document is not a JSON object.
    #[error("Document root is not a JSON object")]
    NotAnObject,
}

/// Result type alias for json-sign operations.
pub type Result<T> = std::result::Result<T, SignError>;
