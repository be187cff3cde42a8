// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the publisher-identifier crates.
//!
//! This crate exists to prevent circular dependencies across:
//! - the wire-format layer (`pubid-common`)
//! - signature verification (`pubid-verification`)
//! - the high-level facade (`pubid`)
//!
//! It is intentionally kept small and stable. It defines the deferred-result
//! type, the wire decoder/encoder capabilities, the typed public-key
//! container, and the asynchronous cryptographic-engine capability.

pub mod deferred;
pub mod engine;
pub mod public_key;
pub mod wire;

pub use deferred::{BoxFuture, Deferred};
pub use engine::{
    CryptoEngine, EngineError, EngineKey, EngineScheme, SignatureData, SignatureEncoding,
    SyncVerifier,
};
pub use public_key::{KeyKind, PublicKey};
pub use wire::{ElementDecoder, ElementEncoder, WireError};
