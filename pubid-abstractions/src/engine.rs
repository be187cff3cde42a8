// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cryptographic execution capabilities.
//!
//! Two capabilities cover the two execution models used for signature
//! verification:
//! - [`CryptoEngine`]: a host-provided asynchronous engine. Availability is
//!   environment-dependent; callers hold it as an `Option`.
//! - [`SyncVerifier`]: the local synchronous primitive. Always available;
//!   `pubid-verification` ships a default implementation.

use std::any::Any;

use thiserror::Error;

use crate::deferred::BoxFuture;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Message(String),
}

/// Key import schemes understood by the asynchronous engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineScheme {
    /// RSASSA-PKCS1-v1.5 with SHA-256.
    RsassaPkcs1V15Sha256,
}

/// An opaque key handle produced by [`CryptoEngine::import_key`].
///
/// Engines downcast through `as_any` to recover their own key type.
pub trait EngineKey: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A host-provided asynchronous cryptographic engine.
///
/// Both operations complete on the engine's own queue. Engine-level faults
/// are reported as [`EngineError`]; a signature that simply does not match
/// resolves `Ok(false)`.
pub trait CryptoEngine: Send + Sync {
    /// Import public key material (SubjectPublicKeyInfo DER) under a scheme.
    fn import_key<'a>(
        &'a self,
        scheme: EngineScheme,
        spki_der: &'a [u8],
    ) -> BoxFuture<'a, Result<Box<dyn EngineKey>, EngineError>>;

    /// Verify `signature` over `content` with a previously imported key.
    fn verify<'a>(
        &'a self,
        key: &'a dyn EngineKey,
        signature: &'a [u8],
        content: &'a [u8],
    ) -> BoxFuture<'a, Result<bool, EngineError>>;
}

/// Signature argument form expected by a synchronous verifier backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureEncoding {
    /// Raw signature bytes.
    Binary,
    /// Base64 text.
    Base64Text,
}

/// A signature argument in the form selected for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureData<'a> {
    Binary(&'a [u8]),
    Base64(String),
}

/// The local synchronous verification primitive.
///
/// Implementations infer the verification algorithm (RSA vs ECDSA, and the
/// curve) from the PEM key material itself.
pub trait SyncVerifier: Send + Sync {
    /// Report which signature argument form this backend expects.
    ///
    /// May be expensive; callers cache the outcome and probe at most once.
    fn probe_signature_encoding(&self) -> SignatureEncoding;

    /// Verify a SHA-256 signature over `content` under the PEM-encoded key.
    ///
    /// Returns `Ok(false)` for a signature that does not match; `Err` is
    /// reserved for structural problems (unusable key material, unsupported
    /// algorithm, backend fault). Carried as a string to avoid leaking the
    /// backend's error type across this crate boundary.
    fn verify_sha256(
        &self,
        key_pem: &str,
        content: &[u8],
        signature: &SignatureData<'_>,
    ) -> Result<bool, String>;
}
