// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed public-key container.
//!
//! Public key inputs are intentionally flexible to support common calling
//! patterns:
//! - DER SubjectPublicKeyInfo (SPKI)
//! - DER X.509 certificate (the SubjectPublicKeyInfo is extracted)
//!
//! The container records the SPKI DER together with the key type resolved
//! from the SPKI algorithm OID. It performs no cryptographic validation of
//! the key material beyond DER parsing.

use x509_parser::prelude::FromDer as _;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// Key algorithm family resolved from the SPKI algorithm OID.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyKind {
    Rsa,
    EllipticCurve,
    /// Anything else; the OID is kept on the key for diagnostics.
    Other,
}

/// A parsed public key: SPKI DER plus its resolved algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    spki_der: Vec<u8>,
    algorithm_oid: String,
    kind: KeyKind,
}

impl PublicKey {
    /// Parse a public key from DER SPKI or DER X.509 certificate bytes.
    pub fn from_der(der: &[u8]) -> Result<Self, String> {
        // If this is a certificate, use the certificate's SubjectPublicKeyInfo.
        if let Ok((_, cert)) = x509_parser::parse_x509_certificate(der) {
            let spki = &cert.tbs_certificate.subject_pki;
            return Ok(Self::from_parts(
                spki.raw.to_vec(),
                spki.algorithm.algorithm.to_string(),
            ));
        }

        let (_, spki) = x509_parser::x509::SubjectPublicKeyInfo::from_der(der)
            .map_err(|e| format!("cannot decode public key material: {e}"))?;
        Ok(Self::from_parts(
            der.to_vec(),
            spki.algorithm.algorithm.to_string(),
        ))
    }

    fn from_parts(spki_der: Vec<u8>, algorithm_oid: String) -> Self {
        let kind = match algorithm_oid.as_str() {
            OID_RSA_ENCRYPTION => KeyKind::Rsa,
            OID_EC_PUBLIC_KEY => KeyKind::EllipticCurve,
            _ => KeyKind::Other,
        };
        Self {
            spki_der,
            algorithm_oid,
            kind,
        }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// The SubjectPublicKeyInfo DER encoding of this key.
    pub fn der(&self) -> &[u8] {
        &self.spki_der
    }

    /// The SPKI algorithm OID in dotted-decimal form.
    pub fn algorithm_oid(&self) -> &str {
        &self.algorithm_oid
    }
}
