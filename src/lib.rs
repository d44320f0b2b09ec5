//! # json-sign
//!
//! A JSON document signing library using SHA-256 digests and RSA
//! PKCS#1 v1.5 signatures.
//!
//! ## Features
//!
//! - **Whole-document signing** wrapping the serialized document and its
//!   signature in a two-field envelope
//! - **Element-wise signing** of selected top-level fields, each signature
//!   stored as a sibling `<field>_signature` field
//! - **Order-preserving document model** so signed output keeps the
//!   original field layout
//! - **Per-field diagnostics** on verification, isolating one corrupt
//!   signature from the rest
//!
//! ## Quick Start
//!
//! ### Sign a Whole Document
//!
//! ```rust
//! use json_sign::{KeyPair, Signer, Verifier};
//!
//! let keypair = KeyPair::generate().unwrap();
//! let text = r#"{"MyElement":"Example text to be signed."}"#;
//!
//! let envelope = Signer::new(&keypair).sign_text(text).unwrap();
//! // The envelope serializes as {"Data": ..., "Signature": ...}
//! println!("{}", envelope.to_json().unwrap());
//!
//! let valid = Verifier::verify_envelope(&envelope, &keypair.public_key()).unwrap();
//! assert!(valid);
//! ```
//!
//! ### Sign Individual Fields
//!
//! ```rust
//! use json_sign::{Document, KeyPair, Signer, Verifier};
//!
//! let keypair = KeyPair::generate().unwrap();
//! let document =
//!     Document::from_json(r#"{"MyElement":"x","tag1":"ExampleData","tag2":"ExampleData"}"#)
//!         .unwrap();
//!
//! let signed = Signer::new(&keypair)
//!     .sign_elements(&document, &["tag1", "tag2"])
//!     .unwrap();
//! assert!(signed.contains("tag1_signature"));
//! assert!(signed.contains("tag2_signature"));
//!
//! let report = Verifier::verify_elements(&signed, &keypair.public_key());
//! assert!(report.all_valid);
//! assert_eq!(report.valid_count(), 2);
//! ```

pub mod document;
pub mod envelope;
pub mod error;
pub mod hash;
pub mod keys;
pub mod signer;
pub mod verifier;

// Re-export main types for convenience
pub use document::{canonical_text, Document, SIGNATURE_SUFFIX};
pub use envelope::SignedEnvelope;
pub use error::{Result, SignError};
pub use hash::{hash_bytes, hash_text, DocumentHash};
pub use keys::{KeyPair, PublicKey};
pub use signer::{sign_elements, sign_text, Signer};
pub use verifier::{
    verify_elements, verify_envelope, ElementReport, FieldResult, FieldStatus, Verifier,
};
