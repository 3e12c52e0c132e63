use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// A JWT token decoded for inspection, without any verification
///
/// At this stage we have:
/// - Split the token into two or three parts (header, payload, signature)
/// - Base64URL-decoded and JSON-parsed the header and payload
/// - Captured the signature part verbatim, if present
///
/// Nothing about the token has been verified. The header and payload are
/// arbitrary JSON values; no schema is enforced on either.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: Value,
    payload: Value,
    signature_b64: Option<String>,
}

impl DecodedToken {
    /// Decode a JWT token from a string
    ///
    /// Accepts both `header.payload.signature` and the unsigned
    /// `header.payload` form. The input is used as-is; leading or trailing
    /// whitespace ends up inside a segment and fails Base64URL decoding.
    ///
    /// # Example
    /// ```ignore
    /// let token = DecodedToken::from_string("eyJ...")?;
    /// println!("{}", token.header());
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let parts: Vec<&str> = token.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(Error::FormatInvalid { found: parts.len() });
        }

        let header = decode_segment(parts[0], MAX_DECODED_HEADER_SIZE, "header")?;
        let payload = decode_segment(parts[1], MAX_DECODED_PAYLOAD_SIZE, "payload")?;

        // The signature is never decoded or validated; it is kept only so
        // the interface can report its presence.
        let signature_b64 = parts.get(2).map(|part| (*part).to_string());

        debug!(
            parts = parts.len(),
            signed = signature_b64.is_some(),
            "decoded token"
        );

        Ok(Self {
            header,
            payload,
            signature_b64,
        })
    }

    /// Get the decoded header value
    pub fn header(&self) -> &Value {
        &self.header
    }

    /// Get the decoded payload value
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Get the raw signature part, if the token had one
    pub fn signature(&self) -> Option<&str> {
        self.signature_b64.as_deref()
    }

    /// Whether the token carried a non-empty signature part
    ///
    /// This says nothing about validity; the signature is never checked.
    pub fn is_signed(&self) -> bool {
        self.signature_b64.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Typed view over the well-known header fields
    pub fn header_info(&self) -> TokenHeader {
        TokenHeader::from_value(&self.header)
    }
}

/// Decode the top-level input, treating blank input as the idle state
///
/// Returns `Ok(None)` for empty or whitespace-only input: no result and no
/// error. Everything else goes through [`DecodedToken::from_string`]
/// untrimmed.
pub fn decode(input: &str) -> Result<Option<DecodedToken>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    DecodedToken::from_string(input).map(Some)
}

fn decode_segment(part: &str, max_size: usize, what: &str) -> Result<Value> {
    let text = base64url::decode_string(part, max_size)?;
    debug!(segment = what, bytes = text.len(), "decoded segment");
    serde_json::from_str(&text)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {what}: {e}")))
}
