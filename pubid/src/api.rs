// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pubid_abstractions::{Deferred, ElementDecoder, ElementEncoder};
use pubid_common::{CodecError, PublisherId, PublisherIdKind};
use pubid_verification::{KeyInput, SignatureVerifier, VerifyError, VerifyOptions};

/// Non-consuming lookahead for the next publisher identifier's kind.
pub fn peek_publisher_id_kind(decoder: &mut impl ElementDecoder) -> Option<PublisherIdKind> {
    PublisherId::peek_kind(decoder)
}

/// True when a publisher identifier is present at the current position.
pub fn can_decode_publisher_id(decoder: &mut impl ElementDecoder) -> bool {
    PublisherId::can_decode(decoder)
}

/// Decode one publisher identifier element.
pub fn decode_publisher_id(decoder: &mut impl ElementDecoder) -> Result<PublisherId, CodecError> {
    PublisherId::decode(decoder)
}

/// Encode a publisher identifier as one tagged binary element.
pub fn encode_publisher_id(
    id: &PublisherId,
    encoder: &mut impl ElementEncoder,
) -> Result<(), CodecError> {
    id.encode(encoder)
}

/// Verify a signature over a content buffer.
pub fn verify_signature<'a>(
    verifier: &SignatureVerifier,
    content: &[u8],
    signature: &[u8],
    key: impl Into<KeyInput<'a>>,
    options: &VerifyOptions,
) -> Deferred<bool, VerifyError> {
    verifier.verify(content, signature, key.into(), options)
}
