// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey as _;
use rsa::RsaPrivateKey;
use sha2::Sha256;
use signature::{SignatureEncoding as _, Signer as _};

use pubid_verification::{KeyInput, SignatureVerifier, VerifyOptions};

fn rsa_fixture(content: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut rng = rand_core::OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let spki = private_key
        .to_public_key()
        .to_public_key_der()
        .unwrap()
        .to_vec();
    let sk = SigningKey::<Sha256>::new(private_key);
    let sig = sk.sign(content).to_vec();
    (spki, sig)
}

#[test]
fn verify_rsa_succeeds_and_resolves_synchronously() {
    let content = b"signed content";
    let (spki, sig) = rsa_fixture(content);

    let verifier = SignatureVerifier::new();
    let result = verifier.verify(content, &sig, KeyInput::Der(&spki), &VerifyOptions::default());

    // No engine configured, so the result is already resolved.
    assert!(result.is_ready());
    assert!(result.now().unwrap().unwrap());
}

#[test]
fn verify_rsa_mutated_signature_resolves_false() {
    let content = b"signed content";
    let (spki, mut sig) = rsa_fixture(content);
    sig[0] ^= 0xff;

    let verifier = SignatureVerifier::new();
    let result = verifier.verify(content, &sig, KeyInput::Der(&spki), &VerifyOptions::default());

    assert!(!result.now().unwrap().unwrap());
}

#[test]
fn verify_rsa_wrong_content_resolves_false() {
    let content = b"signed content";
    let (spki, sig) = rsa_fixture(content);

    let verifier = SignatureVerifier::new();
    let result = verifier.verify(
        b"different content",
        &sig,
        KeyInput::Der(&spki),
        &VerifyOptions::default(),
    );

    assert!(!result.now().unwrap().unwrap());
}

#[test]
fn verify_rsa_truncated_signature_resolves_false() {
    // Unverifiable signature bytes are a mismatch, not a failure.
    let content = b"signed content";
    let (spki, sig) = rsa_fixture(content);

    let verifier = SignatureVerifier::new();
    let result = verifier.verify(
        content,
        &sig[..10],
        KeyInput::Der(&spki),
        &VerifyOptions::default(),
    );

    assert!(!result.now().unwrap().unwrap());
}
