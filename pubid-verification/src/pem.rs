// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! PEM formatting for public key material.
//!
//! The synchronous backend consumes keys as PEM text. The body is the
//! standard base64 encoding of the DER bytes, wrapped at 64 columns between
//! `-----BEGIN <label>-----` / `-----END <label>-----` lines.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;

pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const LINE_WIDTH: usize = 64;

/// Format DER bytes as a PEM block with the given label.
pub fn encode(label: &str, der: &[u8]) -> String {
    let body = B64.encode(der);
    let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + label.len() * 2 + 32);

    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    for chunk in body.as_bytes().chunks(LINE_WIDTH) {
        // Chunks of a base64 string are valid ASCII.
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Recover DER bytes from a PEM block.
///
/// Header/footer lines are dropped by prefix match; the label is not
/// checked. Carried as a string error to match the backend boundary.
pub fn decode(pem: &str) -> Result<Vec<u8>, String> {
    let body: String = pem
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .map(str::trim)
        .collect();

    if body.is_empty() {
        return Err("PEM block has no body".to_string());
    }

    B64.decode(body.as_bytes())
        .map_err(|e| format!("PEM body is not valid base64: {e}"))
}
