// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Default synchronous verification backend.
//!
//! Verifies SHA-256 signatures with in-process cryptography. The key arrives
//! as PEM; the algorithm is inferred from the key material itself:
//! - RSA keys verify under RSASSA-PKCS1-v1.5.
//! - Elliptic-curve keys verify under ECDSA, dispatching on the named curve
//!   (P-256 supported).
//!
//! A signature that does not match yields `Ok(false)`; `Err` is reserved for
//! unusable key material and unsupported algorithms.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::{pkcs1v15, RsaPublicKey};
use sha2::Sha256;
use signature::Verifier;
use x509_parser::prelude::FromDer as _;

use pubid_abstractions::{SignatureData, SignatureEncoding, SyncVerifier};

use crate::pem;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// In-process [`SyncVerifier`] over the RustCrypto primitives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalVerifier;

impl LocalVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl SyncVerifier for LocalVerifier {
    fn probe_signature_encoding(&self) -> SignatureEncoding {
        // In-process verification consumes raw bytes directly.
        SignatureEncoding::Binary
    }

    fn verify_sha256(
        &self,
        key_pem: &str,
        content: &[u8],
        signature: &SignatureData<'_>,
    ) -> Result<bool, String> {
        let spki_der = pem::decode(key_pem)?;

        let sig_bytes: Vec<u8> = match signature {
            SignatureData::Binary(bytes) => bytes.to_vec(),
            SignatureData::Base64(text) => B64
                .decode(text.as_bytes())
                .map_err(|e| format!("signature text is not valid base64: {e}"))?,
        };

        let (_, spki) = x509_parser::x509::SubjectPublicKeyInfo::from_der(&spki_der)
            .map_err(|e| format!("cannot decode public key material: {e}"))?;

        match spki.algorithm.algorithm.to_string().as_str() {
            OID_RSA_ENCRYPTION => verify_rsa_pkcs1(&spki_der, content, &sig_bytes),
            OID_EC_PUBLIC_KEY => verify_ecdsa(&spki_der, content, &sig_bytes),
            other => Err(format!("unsupported key algorithm OID {other}")),
        }
    }
}

fn verify_rsa_pkcs1(spki_der: &[u8], content: &[u8], sig: &[u8]) -> Result<bool, String> {
    let key = RsaPublicKey::from_public_key_der(spki_der)
        .map_err(|e| format!("bad RSA public key: {e}"))?;
    let vk = pkcs1v15::VerifyingKey::<Sha256>::new(key);

    let signature = match pkcs1v15::Signature::try_from(sig) {
        Ok(s) => s,
        // Signature bytes that do not even parse cannot match.
        Err(_) => return Ok(false),
    };

    Ok(vk.verify(content, &signature).is_ok())
}

fn verify_ecdsa(spki_der: &[u8], content: &[u8], sig: &[u8]) -> Result<bool, String> {
    // from_public_key_der rejects keys on curves other than the one it is
    // parameterized over; report those as unusable rather than non-matching.
    let pk = p256::PublicKey::from_public_key_der(spki_der)
        .map_err(|e| format!("unsupported or invalid EC public key: {e}"))?;

    let ep = pk.to_encoded_point(false);
    let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(ep.as_bytes())
        .map_err(|e| format!("bad P-256 public key: {e}"))?;

    // Signatures arrive DER-encoded from the wire; accept the raw r||s form
    // as well for callers holding fixed-width signatures.
    let signature = match p256::ecdsa::Signature::from_der(sig)
        .or_else(|_| p256::ecdsa::Signature::from_slice(sig))
    {
        Ok(s) => s,
        Err(_) => return Ok(false),
    };

    Ok(vk.verify(content, &signature).is_ok())
}
