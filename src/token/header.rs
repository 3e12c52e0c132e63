use serde::Deserialize;
use serde_json::Value;

/// Lenient typed view over a decoded JWT header
///
/// The decoder enforces no schema on the header; this struct only picks out
/// the well-known fields for the one-line summary. Anything absent or of an
/// unexpected shape simply stays `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenHeader {
    /// Algorithm the token claims to be signed with (displayed, never acted on)
    #[serde(rename = "alg")]
    pub algorithm: Option<String>,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,

    /// Key ID
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
}

impl TokenHeader {
    /// Extract the known fields from an arbitrary header value
    ///
    /// Non-object headers (legal as far as the decoder is concerned) yield
    /// an empty view.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Get the algorithm as a string, if present
    pub fn algorithm_str(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Get the key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
