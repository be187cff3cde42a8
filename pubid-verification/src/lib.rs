// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification over publisher content.
//!
//! This crate decides, for one buffer/signature/key triple, whether the
//! signature is valid under the key. The result is always delivered through
//! a deferred value so that the synchronous local path and the asynchronous
//! engine path share one caller-side contract:
//! - RSA keys may verify on a host-provided asynchronous engine when one is
//!   available and the caller does not insist on synchronous execution.
//! - RSA (fallback) and elliptic-curve keys verify on the local synchronous
//!   backend, which consumes the key as PEM and infers the algorithm from
//!   the key material itself.

pub mod algorithms;
pub mod local_verifier;
pub mod pem;
pub mod signature_verifier;

pub use algorithms::DigestAlgorithm;
pub use local_verifier::LocalVerifier;
pub use signature_verifier::{KeyInput, SignatureVerifier, VerifyError, VerifyOptions};
