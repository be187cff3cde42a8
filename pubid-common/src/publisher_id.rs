// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Publisher identifier codec.
//!
//! A publisher identifier names the signer of a piece of content by digest.
//! Four kinds exist; they are structurally identical on the wire (a single
//! tagged binary element carrying the digest) and are distinguished only by
//! their tag. The grammar permits any one of them at this position, so
//! decoding probes the known tags in a fixed order and takes the first
//! match. The probing order is a wire-compatibility invariant.

use thiserror::Error;

use pubid_abstractions::{ElementDecoder, ElementEncoder, WireError};

use crate::tags;

/// Conventional digest length in bytes (the output of a 256-bit digest).
///
/// The codec does not validate payload length; this is the length producers
/// are expected to write.
pub const DIGEST_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The next element matches none of the known identifier tags.
    #[error("unexpected element type at this position")]
    MalformedElement,

    /// The element carries a matched tag but its payload cannot be read.
    #[error("cannot parse publisher identifier payload (tag {0})")]
    Decode(u64),

    /// The value is incomplete and cannot be encoded.
    #[error("missing field values")]
    InvalidState,

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// The four kinds of publisher identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PublisherIdKind {
    /// Digest of the publisher's public key.
    Key,
    /// Digest of the publisher's certificate.
    Certificate,
    /// Digest of the key of the publisher's issuer.
    IssuerKey,
    /// Digest of the certificate of the publisher's issuer.
    IssuerCertificate,
}

impl PublisherIdKind {
    /// Tag probing order. First match wins; do not reorder.
    pub const PROBE_ORDER: [PublisherIdKind; 4] = [
        PublisherIdKind::Key,
        PublisherIdKind::Certificate,
        PublisherIdKind::IssuerKey,
        PublisherIdKind::IssuerCertificate,
    ];

    /// The registry tag this kind is written with.
    pub const fn tag(self) -> u64 {
        match self {
            PublisherIdKind::Key => tags::PUBLISHER_KEY_DIGEST,
            PublisherIdKind::Certificate => tags::PUBLISHER_CERTIFICATE_DIGEST,
            PublisherIdKind::IssuerKey => tags::PUBLISHER_ISSUER_KEY_DIGEST,
            PublisherIdKind::IssuerCertificate => tags::PUBLISHER_ISSUER_CERTIFICATE_DIGEST,
        }
    }
}

/// A publisher identifier: a digest paired with the kind that tagged it.
///
/// A freshly created identifier may not carry a digest yet (the digest is
/// computed from key material elsewhere); a decoded identifier always does.
/// [`PublisherId::encode`] refuses incomplete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherId {
    kind: PublisherIdKind,
    digest: Option<Vec<u8>>,
}

impl PublisherId {
    /// A fresh identifier with no digest yet.
    pub fn new(kind: PublisherIdKind) -> Self {
        Self { kind, digest: None }
    }

    /// An identifier carrying its digest.
    pub fn with_digest(kind: PublisherIdKind, digest: Vec<u8>) -> Self {
        Self {
            kind,
            digest: Some(digest),
        }
    }

    pub fn kind(&self) -> PublisherIdKind {
        self.kind
    }

    pub fn digest(&self) -> Option<&[u8]> {
        self.digest.as_deref()
    }

    pub fn set_digest(&mut self, digest: Vec<u8>) {
        self.digest = Some(digest);
    }

    /// Check the completeness invariant: kind and non-empty digest present.
    pub fn validate(&self) -> Result<(), CodecError> {
        match self.digest.as_deref() {
            Some(d) if !d.is_empty() => Ok(()),
            _ => Err(CodecError::InvalidState),
        }
    }

    /// Non-consuming lookahead for the next identifier's kind.
    ///
    /// Probes the known tags in [`PublisherIdKind::PROBE_ORDER`]; returns the
    /// first match, or `None` when the next element is not an identifier.
    pub fn peek_kind(decoder: &mut impl ElementDecoder) -> Option<PublisherIdKind> {
        PublisherIdKind::PROBE_ORDER
            .into_iter()
            .find(|kind| decoder.peek_tag(kind.tag()))
    }

    /// True when an identifier is present at the current position.
    pub fn can_decode(decoder: &mut impl ElementDecoder) -> bool {
        Self::peek_kind(decoder).is_some()
    }

    /// Decode one identifier element.
    pub fn decode(decoder: &mut impl ElementDecoder) -> Result<Self, CodecError> {
        let kind = Self::peek_kind(decoder).ok_or(CodecError::MalformedElement)?;
        let digest = decoder
            .read_tagged_binary(kind.tag())
            .ok_or(CodecError::Decode(kind.tag()))?;
        Ok(Self::with_digest(kind, digest))
    }

    /// Encode this identifier as one tagged binary element.
    ///
    /// Fails with [`CodecError::InvalidState`] before writing anything when
    /// the value is incomplete.
    pub fn encode(&self, encoder: &mut impl ElementEncoder) -> Result<(), CodecError> {
        self.validate()?;
        let digest = self.digest.as_deref().ok_or(CodecError::InvalidState)?;
        encoder.write_tagged_binary(self.kind.tag(), digest)?;
        Ok(())
    }
}
