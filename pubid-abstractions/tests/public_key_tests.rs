// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pubid_abstractions::{KeyKind, PublicKey};
use rsa::pkcs8::EncodePublicKey as _;

// Ed25519 SubjectPublicKeyInfo (OID 1.3.101.112) with an all-zero key.
const ED25519_SPKI: [u8; 44] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[test]
fn rsa_spki_resolves_to_rsa() {
    let mut rng = rand_core::OsRng;
    let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let spki = private_key
        .to_public_key()
        .to_public_key_der()
        .unwrap()
        .to_vec();

    let key = PublicKey::from_der(&spki).unwrap();
    assert_eq!(key.kind(), KeyKind::Rsa);
    assert_eq!(key.algorithm_oid(), "1.2.840.113549.1.1.1");
    assert_eq!(key.der(), spki.as_slice());
}

#[test]
fn p256_spki_resolves_to_elliptic_curve() {
    let sk = p256::ecdsa::SigningKey::random(&mut p256::elliptic_curve::rand_core::OsRng);
    let spki = sk
        .verifying_key()
        .to_public_key_der()
        .unwrap()
        .as_bytes()
        .to_vec();

    let key = PublicKey::from_der(&spki).unwrap();
    assert_eq!(key.kind(), KeyKind::EllipticCurve);
    assert_eq!(key.algorithm_oid(), "1.2.840.10045.2.1");
}

#[test]
fn certificate_der_yields_embedded_spki() {
    let issued = rcgen::generate_simple_self_signed(vec!["node.example".to_string()]).unwrap();
    let cert_der = issued.cert.der().as_ref().to_vec();

    let key = PublicKey::from_der(&cert_der).unwrap();
    // rcgen's default signing algorithm is ECDSA over P-256.
    assert_eq!(key.kind(), KeyKind::EllipticCurve);
    assert_ne!(key.der(), cert_der.as_slice());
    // The extracted SPKI parses on its own.
    let again = PublicKey::from_der(key.der()).unwrap();
    assert_eq!(again.kind(), KeyKind::EllipticCurve);
}

#[test]
fn unknown_algorithm_resolves_to_other() {
    let key = PublicKey::from_der(&ED25519_SPKI).unwrap();
    assert_eq!(key.kind(), KeyKind::Other);
    assert_eq!(key.algorithm_oid(), "1.3.101.112");
}

#[test]
fn garbage_bytes_fail_to_parse() {
    assert!(PublicKey::from_der(&[0xde, 0xad, 0xbe, 0xef]).is_err());
    assert!(PublicKey::from_der(&[]).is_err());
}
