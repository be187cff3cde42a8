// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tagged binary elements over CBOR.
//!
//! An element is a CBOR tag followed by a byte string. The decoder offers a
//! non-consuming tag lookahead; grammar productions that present a choice of
//! several tags at one position rely on it to dispatch without a separate
//! discriminator.

use minicbor::data::{Tag, Type};
use minicbor::{Decoder, Encoder};

use pubid_abstractions::{ElementDecoder, ElementEncoder, WireError};

/// Reads tagged binary elements from a byte slice.
pub struct WireDecoder<'b> {
    decoder: Decoder<'b>,
}

impl<'b> WireDecoder<'b> {
    pub fn new(input: &'b [u8]) -> Self {
        Self {
            decoder: Decoder::new(input),
        }
    }

    /// Current read position in the input.
    pub fn position(&self) -> usize {
        self.decoder.position()
    }
}

impl ElementDecoder for WireDecoder<'_> {
    fn peek_tag(&mut self, tag: u64) -> bool {
        let start = self.decoder.position();
        let matched = matches!(self.decoder.datatype(), Ok(Type::Tag))
            && self.decoder.tag().map_or(false, |t| t == Tag::new(tag));
        self.decoder.set_position(start);
        matched
    }

    fn read_tagged_binary(&mut self, tag: u64) -> Option<Vec<u8>> {
        if !self.peek_tag(tag) {
            return None;
        }

        let start = self.decoder.position();
        if self.decoder.tag().is_err() {
            return None;
        }
        match self.decoder.bytes() {
            Ok(payload) => Some(payload.to_vec()),
            Err(_) => {
                // Leave the cursor where it was; the element is unusable.
                self.decoder.set_position(start);
                None
            }
        }
    }
}

/// Appends tagged binary elements to an owned buffer.
#[derive(Debug, Default)]
pub struct WireEncoder {
    buf: Vec<u8>,
}

impl WireEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl ElementEncoder for WireEncoder {
    fn write_tagged_binary(&mut self, tag: u64, bytes: &[u8]) -> Result<(), WireError> {
        let mut enc = Encoder::new(&mut self.buf);
        enc.tag(Tag::new(tag))
            .map_err(|e| WireError(e.to_string()))?;
        enc.bytes(bytes).map_err(|e| WireError(e.to_string()))?;
        Ok(())
    }
}
