// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod publisher_id;
pub mod tags;
pub mod wire;

pub use publisher_id::{CodecError, PublisherId, PublisherIdKind, DIGEST_LEN};
pub use wire::{WireDecoder, WireEncoder};
