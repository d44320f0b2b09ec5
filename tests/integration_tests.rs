//! Integration tests for json-sign library.

use json_sign::{
    sign_elements, sign_text, verify_elements, Document, FieldStatus, KeyPair, SignError,
    SignedEnvelope, Signer, Verifier,
};
use std::sync::OnceLock;

/// One generated key per test binary; RSA keygen is too slow to repeat in
/// every test.
fn keypair() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| KeyPair::generate().expect("test key generation"))
}

fn other_keypair() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| KeyPair::generate().expect("test key generation"))
}

#[test]
fn test_whole_document_roundtrip() {
    let text = r#"{"MyElement":"Example text to be signed."}"#;

    let envelope = Signer::new(keypair()).sign_text(text).unwrap();
    assert_eq!(envelope.data, text);

    // Persist and reload the envelope as JSON, as a caller would.
    let json = envelope.to_json().unwrap();
    let restored = SignedEnvelope::from_json(&json).unwrap();

    let valid = Verifier::verify_envelope(&restored, &keypair().public_key()).unwrap();
    assert!(valid);
}

#[test]
fn test_tampered_data_fails_verification() {
    let text = r#"{"MyElement":"Example text to be signed."}"#;
    let envelope = sign_text(keypair(), text).unwrap();

    // Appending one character to Data must invalidate the signature.
    let mut tampered = envelope.clone();
    tampered.data.push('!');

    let valid = Verifier::verify_envelope(&tampered, &keypair().public_key()).unwrap();
    assert!(!valid);
}

#[test]
fn test_tampered_signature_fails_verification() {
    let envelope = sign_text(keypair(), "document text").unwrap();

    // Flip a character of the base64 signature, keeping it decodable.
    let mut chars: Vec<char> = envelope.signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered = SignedEnvelope {
        data: envelope.data.clone(),
        signature: chars.into_iter().collect(),
    };

    let valid = Verifier::verify_envelope(&tampered, &keypair().public_key()).unwrap();
    assert!(!valid);
}

#[test]
fn test_structurally_corrupt_envelope_is_malformed() {
    let envelope = sign_text(keypair(), "document text").unwrap();

    // Corrupt the signature into something that is not base64 at all.
    let corrupt = SignedEnvelope {
        data: envelope.data.clone(),
        signature: "*** not base64 ***".to_string(),
    };
    let result = Verifier::verify_envelope(&corrupt, &keypair().public_key());
    assert!(matches!(result, Err(SignError::MalformedEnvelope(_))));

    // A missing Signature field is equally structural.
    let result = Verifier::verify_envelope_json(r#"{"Data":"d"}"#, &keypair().public_key());
    assert!(matches!(result, Err(SignError::MalformedEnvelope(_))));
}

#[test]
fn test_key_mismatch_fails_verification() {
    let envelope = sign_text(keypair(), "document text").unwrap();

    let valid = Verifier::verify_envelope(&envelope, &other_keypair().public_key()).unwrap();
    assert!(!valid);
}

#[test]
fn test_element_wise_example_scenario() {
    let document =
        Document::from_json(r#"{"MyElement":"x","tag1":"ExampleData","tag2":"ExampleData"}"#)
            .unwrap();

    let signed = sign_elements(keypair(), &document, &["tag1", "tag2"]).unwrap();

    assert!(signed.contains("tag1_signature"));
    assert!(signed.contains("tag2_signature"));
    assert!(!signed.contains("MyElement_signature"));

    let report = verify_elements(&signed, &keypair().public_key());
    assert!(report.all_valid);
    assert_eq!(report.field("tag1").unwrap().status, FieldStatus::Valid);
    assert_eq!(report.field("tag2").unwrap().status, FieldStatus::Valid);
    assert_eq!(
        report.field("MyElement").unwrap().status,
        FieldStatus::Unsigned
    );
}

#[test]
fn test_element_isolation() {
    let document = Document::from_json(r#"{"a":"first","b":"second"}"#).unwrap();
    let signed = sign_elements(keypair(), &document, &["a", "b"]).unwrap();

    // Corrupt a's signature; b's verification outcome must not change.
    let mut corrupted = signed.clone();
    corrupted.insert("a_signature", serde_json::json!("AAAA"));

    let report = verify_elements(&corrupted, &keypair().public_key());
    assert!(!report.all_valid);
    assert_eq!(report.field("a").unwrap().status, FieldStatus::Invalid);
    assert_eq!(report.field("b").unwrap().status, FieldStatus::Valid);
}

#[test]
fn test_vacuous_validity() {
    let document = Document::from_json(r#"{"a":"1","b":"2"}"#).unwrap();

    let report = verify_elements(&document, &keypair().public_key());

    assert!(report.all_valid);
    assert_eq!(report.valid_count(), 0);
    assert_eq!(report.invalid_count(), 0);
}

#[test]
fn test_skip_missing_policy() {
    let document = Document::from_json(r#"{"present":"value"}"#).unwrap();

    let signed = sign_elements(keypair(), &document, &["absentField"]).unwrap();

    // No signature field added, no error: output identical to input.
    assert_eq!(signed, document);
}

#[test]
fn test_signature_collision_is_rejected() {
    let document =
        Document::from_json(r#"{"tag1":"data","tag1_signature":"already here"}"#).unwrap();

    let result = sign_elements(keypair(), &document, &["tag1"]);
    assert!(matches!(result, Err(SignError::SignatureCollision(_))));
}

#[test]
fn test_signed_document_roundtrips_through_json() {
    let document = Document::from_json(r#"{"MyElement":"x","tag1":"ExampleData"}"#).unwrap();
    let signed = sign_elements(keypair(), &document, &["tag1"]).unwrap();

    let json = signed.to_json_pretty().unwrap();
    let restored = Document::from_json(&json).unwrap();
    assert_eq!(signed, restored);

    let report = verify_elements(&restored, &keypair().public_key());
    assert!(report.all_valid);
    assert_eq!(report.valid_count(), 1);
}

#[test]
fn test_sign_document_signs_exact_serialization() {
    let document = Document::from_json(r#"{"b":"2","a":"1"}"#).unwrap();

    let envelope = Signer::new(keypair()).sign_document(&document).unwrap();

    // Data is the compact serialization in original field order.
    assert_eq!(envelope.data, r#"{"b":"2","a":"1"}"#);
    let valid = Verifier::verify_envelope(&envelope, &keypair().public_key()).unwrap();
    assert!(valid);
}

#[test]
fn test_verification_works_from_public_key_pem_alone() {
    let pem = keypair().public_key().to_spki_pem().unwrap();
    let public_key = json_sign::PublicKey::from_spki_pem(&pem).unwrap();

    let envelope = sign_text(keypair(), "shared with a verifier").unwrap();
    assert!(Verifier::verify_envelope(&envelope, &public_key).unwrap());
}
