//! SHA-256 hashing utilities for document signing.

use crate::error::Result;
use sha2::{Digest, Sha256};

/// The size of a SHA-256 hash output in bytes.
pub const HASH_SIZE: usize = 32;

/// A SHA-256 digest of document content.
///
/// This is the payload handed to the RSA primitive; raw document bytes are
/// never signed directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHash([u8; HASH_SIZE]);

impl DocumentHash {
    /// Create a hash from raw bytes.
    pub fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Encode the hash as a base64 string.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(self.0)
    }

    /// Decode a hash from a base64 string.
    pub fn from_base64(s: &str) -> Result<Self> {
        use base64::Engine;
        let bytes = base64::engine::general_purpose::STANDARD.decode(s)?;
        if bytes.len() != HASH_SIZE {
            return Err(crate::error::SignError::InvalidArgument(format!(
                "Invalid hash length: expected {}, got {}",
                HASH_SIZE,
                bytes.len()
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Encode the hash as a hexadecimal string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Compute the SHA-256 hash of a byte slice.
pub fn hash_bytes(data: &[u8]) -> DocumentHash {
    let digest: [u8; HASH_SIZE] = Sha256::digest(data).into();
    DocumentHash(digest)
}

/// Compute the SHA-256 hash of the UTF-8 encoding of a string.
///
/// This is the digest primitive both signing modes are built on: any string
/// is valid input, including the empty string.
pub fn hash_text(text: &str) -> DocumentHash {
    hash_bytes(text.as_bytes())
}
