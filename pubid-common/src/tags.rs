// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Wire tag registry for publisher-identifier elements.
//!
//! Tags are assigned protocol-wide; values are globally unique and ordered.
//! This module holds only the slice of the registry that the identifier
//! codec needs.

/// Digest of the publisher's public key.
pub const PUBLISHER_KEY_DIGEST: u64 = 59;

/// Digest of the publisher's certificate.
pub const PUBLISHER_CERTIFICATE_DIGEST: u64 = 60;

/// Digest of the key of the publisher's issuer.
pub const PUBLISHER_ISSUER_KEY_DIGEST: u64 = 61;

/// Digest of the certificate of the publisher's issuer.
pub const PUBLISHER_ISSUER_CERTIFICATE_DIGEST: u64 = 62;
