//! Errors for jwtlens

use thiserror::Error;

/// Errors that can occur while decoding a token
///
/// Decoding never produces partial results: any failure in any segment
/// aborts the whole decode. Each variant carries enough context for a
/// single-line diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Invalid JWT format: expected two or three parts separated by '.', found {found}")]
    FormatInvalid { found: usize },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),
}

/// Result type alias for jwtlens operations
pub type Result<T> = std::result::Result<T, Error>;
