//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! alphabet normalization and size limit validation.
//!
//! Decoding is deliberately lenient: segments copied out of HTTP headers or
//! other tooling sometimes arrive with `=` padding or in the standard
//! alphabet (`+`, `/`). Both are normalized to unpadded Base64URL before
//! decoding, matching the behavior of translating the alphabet and padding
//! before handing the segment to a standard decoder.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to unpadded Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes with a maximum decoded size
///
/// Accepts `+`/`/` in place of `-`/`_` and ignores trailing `=` padding.
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let trimmed = input.trim_end_matches('=');
    let normalized: String = trimmed
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let result = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::FormatInvalidBase64(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Decode a Base64URL string to a UTF-8 string with a maximum decoded size
pub fn decode_string(input: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, max_size).and_then(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
    })
}
