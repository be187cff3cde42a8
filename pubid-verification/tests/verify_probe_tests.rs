// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature-encoding capability probe coverage.
//!
//! The backend's preferred signature form is probed at most once per
//! verifier; all verifications, including concurrent first uses, observe one
//! consistent outcome.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use p256::ecdsa::signature::Signer;
use p256::pkcs8::EncodePublicKey as _;

use pubid_abstractions::{SignatureData, SignatureEncoding, SyncVerifier};
use pubid_verification::{KeyInput, LocalVerifier, SignatureVerifier, VerifyOptions};

/// Backend that insists on base64 text signatures and counts probes.
struct Base64Backend {
    probes: AtomicUsize,
    inner: LocalVerifier,
}

impl Base64Backend {
    fn new() -> Self {
        Self {
            probes: AtomicUsize::new(0),
            inner: LocalVerifier::new(),
        }
    }
}

impl SyncVerifier for Base64Backend {
    fn probe_signature_encoding(&self) -> SignatureEncoding {
        self.probes.fetch_add(1, Ordering::SeqCst);
        SignatureEncoding::Base64Text
    }

    fn verify_sha256(
        &self,
        key_pem: &str,
        content: &[u8],
        signature: &SignatureData<'_>,
    ) -> Result<bool, String> {
        match signature {
            SignatureData::Base64(text) => {
                let bytes = B64
                    .decode(text.as_bytes())
                    .map_err(|e| format!("expected base64 text signature: {e}"))?;
                self.inner
                    .verify_sha256(key_pem, content, &SignatureData::Binary(&bytes))
            }
            SignatureData::Binary(_) => Err("expected base64 text signature".to_string()),
        }
    }
}

fn p256_fixture(content: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let sk = p256::ecdsa::SigningKey::random(&mut p256::elliptic_curve::rand_core::OsRng);
    let spki = sk
        .verifying_key()
        .to_public_key_der()
        .unwrap()
        .as_bytes()
        .to_vec();
    let sig: p256::ecdsa::Signature = sk.sign(content);
    (spki, sig.to_der().as_bytes().to_vec())
}

#[test]
fn base64_backend_receives_text_and_verifies() {
    let content = b"probed content";
    let (spki, sig) = p256_fixture(content);

    let backend = Arc::new(Base64Backend::new());
    let verifier = SignatureVerifier::new().with_backend(backend.clone());

    let result = verifier.verify(content, &sig, KeyInput::Der(&spki), &VerifyOptions::default());
    assert!(result.now().unwrap().unwrap());
    assert_eq!(backend.probes.load(Ordering::SeqCst), 1);

    // A second verification reuses the cached probe outcome.
    let result = verifier.verify(content, &sig, KeyInput::Der(&spki), &VerifyOptions::default());
    assert!(result.now().unwrap().unwrap());
    assert_eq!(backend.probes.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_first_use_observes_one_probe_outcome() {
    let content = b"probed content";
    let (spki, sig) = p256_fixture(content);

    let backend = Arc::new(Base64Backend::new());
    let verifier = Arc::new(SignatureVerifier::new().with_backend(backend.clone()));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let verifier = Arc::clone(&verifier);
            let spki = &spki;
            let sig = &sig;
            scope.spawn(move || {
                let result =
                    verifier.verify(content, sig, KeyInput::Der(spki), &VerifyOptions::default());
                assert!(result.now().unwrap().unwrap());
            });
        }
    });

    assert_eq!(backend.probes.load(Ordering::SeqCst), 1);
}
