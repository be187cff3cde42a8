// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Digest algorithms callers can request for verification.
///
/// Only SHA-256 is supported today; the others are recognized so that a
/// request for them can be rejected explicitly rather than falling through
/// as an unknown value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}
