// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification entry point.
//!
//! [`SignatureVerifier::verify`] implements the verification flow:
//! 1) Normalize the key input (raw DER is parsed into a typed key).
//! 2) Reject digest algorithms other than SHA-256.
//! 3) Dispatch on key type and execution mode: RSA may run on the
//!    asynchronous engine when one is configured and the caller allows it;
//!    RSA otherwise and elliptic-curve always run on the synchronous
//!    backend.
//!
//! Failures are only ever delivered through the returned deferred value, so
//! synchronous and asynchronous callers share one failure-handling path. A
//! signature that simply does not match resolves `Ok(false)`.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use once_cell::sync::OnceCell;
use thiserror::Error;

use pubid_abstractions::{
    CryptoEngine, Deferred, EngineError, EngineScheme, KeyKind, PublicKey, SignatureData,
    SignatureEncoding, SyncVerifier,
};

use crate::algorithms::DigestAlgorithm;
use crate::local_verifier::LocalVerifier;
use crate::pem;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The key bytes could not be parsed into a public key.
    #[error("cannot decode public key material: {0}")]
    InvalidKey(String),

    /// The requested digest algorithm is not supported.
    #[error("unsupported digest algorithm {0:?}")]
    UnsupportedAlgorithm(DigestAlgorithm),

    /// The key parsed, but its algorithm family is not supported.
    #[error("unsupported key type (algorithm OID {0})")]
    UnsupportedKeyType(String),

    /// The underlying engine or backend failed.
    #[error("verification engine failure: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Digest algorithm the signature was produced with.
    pub digest_algorithm: DigestAlgorithm,

    /// If true, never delegate to the asynchronous engine.
    pub prefer_synchronous: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            digest_algorithm: DigestAlgorithm::Sha256,
            prefer_synchronous: false,
        }
    }
}

/// Public key input: already parsed, or raw DER to be parsed first.
#[derive(Debug, Clone, Copy)]
pub enum KeyInput<'a> {
    Parsed(&'a PublicKey),
    Der(&'a [u8]),
}

impl<'a> From<&'a PublicKey> for KeyInput<'a> {
    fn from(key: &'a PublicKey) -> Self {
        Self::Parsed(key)
    }
}

impl<'a> From<&'a [u8]> for KeyInput<'a> {
    fn from(der: &'a [u8]) -> Self {
        Self::Der(der)
    }
}

/// Verifies signatures over content buffers.
///
/// Holds the execution environment: an optional host-provided asynchronous
/// engine, the synchronous backend, and the backend's signature-encoding
/// capability (probed once per verifier, on first synchronous use).
pub struct SignatureVerifier {
    engine: Option<Arc<dyn CryptoEngine>>,
    backend: Arc<dyn SyncVerifier>,
    signature_encoding: OnceCell<SignatureEncoding>,
}

impl Default for SignatureVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureVerifier {
    /// A verifier with the in-process backend and no asynchronous engine.
    pub fn new() -> Self {
        Self {
            engine: None,
            backend: Arc::new(LocalVerifier::new()),
            signature_encoding: OnceCell::new(),
        }
    }

    /// Attach a host-provided asynchronous engine.
    pub fn with_engine(mut self, engine: Arc<dyn CryptoEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Replace the synchronous backend.
    pub fn with_backend(mut self, backend: Arc<dyn SyncVerifier>) -> Self {
        self.backend = backend;
        self
    }

    /// Verify `signature` over `content` under the given public key.
    ///
    /// The returned deferred is already resolved on the synchronous path and
    /// pending on the engine path; callers must not assume either. All
    /// failures, including key parse failures, arrive through the deferred.
    pub fn verify(
        &self,
        content: &[u8],
        signature: &[u8],
        key: KeyInput<'_>,
        options: &VerifyOptions,
    ) -> Deferred<bool, VerifyError> {
        let key = match key {
            KeyInput::Parsed(key) => key.clone(),
            KeyInput::Der(der) => match PublicKey::from_der(der) {
                Ok(key) => key,
                Err(e) => return Deferred::ready(Err(VerifyError::InvalidKey(e))),
            },
        };

        if options.digest_algorithm != DigestAlgorithm::Sha256 {
            return Deferred::ready(Err(VerifyError::UnsupportedAlgorithm(
                options.digest_algorithm,
            )));
        }

        match key.kind() {
            KeyKind::Rsa => {
                if let Some(engine) = self.engine.as_ref().filter(|_| !options.prefer_synchronous)
                {
                    return verify_on_engine(engine.clone(), key, content, signature);
                }
                self.verify_synchronously(&key, content, signature)
            }
            KeyKind::EllipticCurve => self.verify_synchronously(&key, content, signature),
            KeyKind::Other => Deferred::ready(Err(VerifyError::UnsupportedKeyType(
                key.algorithm_oid().to_string(),
            ))),
        }
    }

    fn verify_synchronously(
        &self,
        key: &PublicKey,
        content: &[u8],
        signature: &[u8],
    ) -> Deferred<bool, VerifyError> {
        let key_pem = pem::encode(pem::PUBLIC_KEY_LABEL, key.der());

        let signature = match self.signature_encoding() {
            SignatureEncoding::Binary => SignatureData::Binary(signature),
            SignatureEncoding::Base64Text => SignatureData::Base64(B64.encode(signature)),
        };

        let outcome = self
            .backend
            .verify_sha256(&key_pem, content, &signature)
            .map_err(|e| VerifyError::Engine(EngineError::Message(e)));
        Deferred::ready(outcome)
    }

    /// The backend's signature argument form, probed at most once.
    ///
    /// Racing first calls re-run the probe but observe one consistent value.
    fn signature_encoding(&self) -> SignatureEncoding {
        *self
            .signature_encoding
            .get_or_init(|| self.backend.probe_signature_encoding())
    }
}

fn verify_on_engine(
    engine: Arc<dyn CryptoEngine>,
    key: PublicKey,
    content: &[u8],
    signature: &[u8],
) -> Deferred<bool, VerifyError> {
    let content = content.to_vec();
    let signature = signature.to_vec();
    Deferred::pending(async move {
        let handle = engine
            .import_key(EngineScheme::RsassaPkcs1V15Sha256, key.der())
            .await?;
        Ok(engine.verify(handle.as_ref(), &signature, &content).await?)
    })
}
