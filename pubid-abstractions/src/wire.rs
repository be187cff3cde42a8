// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Wire-format capabilities.
//!
//! The surrounding protocol tokenizes its wire format into self-describing
//! tagged elements. Codecs in this workspace consume that tokenizer through
//! the narrow interfaces below rather than depending on a concrete decoder
//! type; `pubid-common` provides one concrete implementation.

use thiserror::Error;

/// Error raised by an encoder capability while appending an element.
///
/// Carried as a string to avoid leaking the underlying encoder's error type
/// across this crate boundary.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct WireError(pub String);

/// Read side of the tokenized wire format.
pub trait ElementDecoder {
    /// Non-consuming lookahead: true when the next element carries `tag`.
    ///
    /// The read cursor is unchanged on return.
    fn peek_tag(&mut self, tag: u64) -> bool;

    /// Consume a binary element with the given tag and return its payload.
    ///
    /// Returns `None` when the element is absent or malformed.
    fn read_tagged_binary(&mut self, tag: u64) -> Option<Vec<u8>>;
}

/// Write side of the tokenized wire format.
pub trait ElementEncoder {
    /// Append one tagged binary element.
    fn write_tagged_binary(&mut self, tag: u64, bytes: &[u8]) -> Result<(), WireError>;
}
