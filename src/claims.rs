//! Display-only view of the registered JWT claims
//!
//! Standard claims from [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1),
//! extracted leniently from a decoded payload for the summary lines. These
//! are never validated: an expired `exp` or a future `nbf` is displayed
//! exactly like any other value.

use serde::Deserialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Audience (aud) claim, which RFC 7519 allows as a string or an array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Standard JWT claims, all optional
#[derive(Debug, Clone, Default)]
pub struct RegisteredClaims {
    /// Issuer (iss) - principal that issued the JWT
    pub issuer: Option<String>,

    /// Subject (sub) - principal the JWT is about
    pub subject: Option<String>,

    /// Audience (aud) - intended recipients
    pub audience: Option<Audience>,

    /// Expiration Time (exp) - seconds since Unix epoch
    pub expiration: Option<i64>,

    /// Not Before (nbf) - seconds since Unix epoch
    pub not_before: Option<i64>,

    /// Issued At (iat) - seconds since Unix epoch
    pub issued_at: Option<i64>,

    /// JWT ID (jti) - unique identifier for the JWT
    pub jwt_id: Option<String>,
}

impl RegisteredClaims {
    /// Extract the registered claims from an arbitrary payload value
    ///
    /// Each claim is extracted independently: a claim with an unexpected
    /// type stays `None` without hiding the others. Non-object payloads
    /// yield an empty view.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            issuer: string_claim(map, "iss"),
            subject: string_claim(map, "sub"),
            audience: map
                .get("aud")
                .and_then(|aud| serde_json::from_value(aud.clone()).ok()),
            expiration: int_claim(map, "exp"),
            not_before: int_claim(map, "nbf"),
            issued_at: int_claim(map, "iat"),
            jwt_id: string_claim(map, "jti"),
        }
    }

    /// Whether any registered claim is present
    pub fn is_empty(&self) -> bool {
        self.issuer.is_none()
            && self.subject.is_none()
            && self.audience.is_none()
            && self.expiration.is_none()
            && self.not_before.is_none()
            && self.issued_at.is_none()
            && self.jwt_id.is_none()
    }

    /// Summary lines for the interface, one per present claim
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(iss) = &self.issuer {
            lines.push(format!("iss  {iss}"));
        }
        if let Some(sub) = &self.subject {
            lines.push(format!("sub  {sub}"));
        }
        if let Some(aud) = &self.audience {
            match aud {
                Audience::One(aud) => lines.push(format!("aud  {aud}")),
                Audience::Many(auds) => lines.push(format!("aud  {}", auds.join(", "))),
            }
        }
        if let Some(exp) = self.expiration {
            lines.push(format!("exp  {}", format_timestamp(exp)));
        }
        if let Some(nbf) = self.not_before {
            lines.push(format!("nbf  {}", format_timestamp(nbf)));
        }
        if let Some(iat) = self.issued_at {
            lines.push(format!("iat  {}", format_timestamp(iat)));
        }
        if let Some(jti) = &self.jwt_id {
            lines.push(format!("jti  {jti}"));
        }
        lines
    }
}

fn string_claim(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_claim(map: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    map.get(key).and_then(Value::as_i64)
}

/// Format a Unix timestamp as RFC 3339, falling back to the raw number
/// for out-of-range values
pub fn format_timestamp(ts: i64) -> String {
    OffsetDateTime::from_unix_timestamp(ts)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .map(|formatted| format!("{formatted} ({ts})"))
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standard_claims() {
        let claims = RegisteredClaims::from_value(&json!({
            "iss": "https://example.com",
            "sub": "user123",
            "exp": 1516242622,
            "iat": 1516239022,
            "custom": "ignored"
        }));

        assert_eq!(claims.issuer.as_deref(), Some("https://example.com"));
        assert_eq!(claims.subject.as_deref(), Some("user123"));
        assert_eq!(claims.expiration, Some(1516242622));
        assert_eq!(claims.issued_at, Some(1516239022));
        assert!(!claims.is_empty());
    }

    #[test]
    fn test_audience_string_or_array() {
        let one = RegisteredClaims::from_value(&json!({"aud": "api"}));
        assert_eq!(one.audience, Some(Audience::One("api".to_string())));

        let many = RegisteredClaims::from_value(&json!({"aud": ["api", "web"]}));
        assert_eq!(
            many.audience,
            Some(Audience::Many(vec!["api".to_string(), "web".to_string()]))
        );
    }

    #[test]
    fn test_no_registered_claims() {
        let claims = RegisteredClaims::from_value(&json!({"custom": true}));
        assert!(claims.is_empty());
        assert!(claims.summary_lines().is_empty());
    }

    #[test]
    fn test_off_type_claim_does_not_hide_others() {
        let claims = RegisteredClaims::from_value(&json!({
            "iss": "issuer",
            "sub": "user",
            "exp": "soon"
        }));

        assert_eq!(claims.issuer.as_deref(), Some("issuer"));
        assert_eq!(claims.subject.as_deref(), Some("user"));
        assert_eq!(claims.expiration, None);

        let lines = claims.summary_lines();
        assert_eq!(lines, ["iss  issuer", "sub  user"]);
    }

    #[test]
    fn test_non_string_audience_ignored() {
        let claims = RegisteredClaims::from_value(&json!({
            "aud": 42,
            "sub": "user"
        }));
        assert_eq!(claims.audience, None);
        assert_eq!(claims.subject.as_deref(), Some("user"));

        // Arrays with non-string entries are off-type for aud as a whole
        let mixed = RegisteredClaims::from_value(&json!({"aud": ["api", 1]}));
        assert_eq!(mixed.audience, None);
    }

    #[test]
    fn test_non_object_payload() {
        let claims = RegisteredClaims::from_value(&json!("just a string"));
        assert!(claims.is_empty());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(1516239022),
            "2018-01-18T01:30:22Z (1516239022)"
        );
        // Far outside OffsetDateTime's range: fall back to the raw number
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_summary_lines_order() {
        let claims = RegisteredClaims::from_value(&json!({
            "sub": "user",
            "iss": "issuer",
            "jti": "id-1"
        }));
        let lines = claims.summary_lines();
        assert_eq!(lines[0], "iss  issuer");
        assert_eq!(lines[1], "sub  user");
        assert_eq!(lines[2], "jti  id-1");
    }
}
