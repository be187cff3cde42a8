// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! High-level publisher-identifier facade.
//!
//! This crate is the primary entry point for decoding/encoding publisher
//! identifiers and for verifying signatures over publisher content.
//!
//! Design note: to keep the public API simple, the codec and verification
//! APIs are exposed directly at the crate root.

mod api;

pub use pubid_abstractions::{
    BoxFuture, CryptoEngine, Deferred, ElementDecoder, ElementEncoder, EngineError, EngineKey,
    EngineScheme, KeyKind, PublicKey, SignatureData, SignatureEncoding, SyncVerifier, WireError,
};
pub use pubid_common::{tags, CodecError, PublisherId, PublisherIdKind, WireDecoder, WireEncoder};
pub use pubid_verification::{
    DigestAlgorithm, KeyInput, LocalVerifier, SignatureVerifier, VerifyError, VerifyOptions,
};

pub use api::{
    can_decode_publisher_id, decode_publisher_id, encode_publisher_id, peek_publisher_id_kind,
    verify_signature,
};
