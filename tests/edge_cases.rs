//! Edge case tests for token decoding
//!
//! These tests cover challenging edge cases that are commonly tested in JWT
//! libraries to ensure robust decoding of arbitrary pasted input.

use jwtlens::*;
use serde_json::json;

fn create_valid_token() -> String {
    let header = r#"{"alg":"HS256","typ":"JWT"}"#;
    let payload = r#"{"iss":"test","sub":"user","exp":9999999999}"#;

    format!(
        "{}.{}.{}",
        utils::base64url::encode(header),
        utils::base64url::encode(payload),
        utils::base64url::encode("signature")
    )
}

// ============================================================================
// Token Format Edge Cases
// ============================================================================

#[test]
fn test_empty_input_is_idle() {
    assert_eq!(decode("").unwrap(), None);
    assert_eq!(decode(" \t\n").unwrap(), None);
}

#[test]
fn test_single_dot() {
    // "." splits into two empty parts; both decode to empty strings,
    // which are not valid JSON
    assert!(matches!(
        DecodedToken::from_string("."),
        Err(Error::FormatInvalidJson(_))
    ));
}

#[test]
fn test_one_part() {
    assert!(matches!(
        DecodedToken::from_string("just-one-part"),
        Err(Error::FormatInvalid { found: 1 })
    ));
}

#[test]
fn test_four_parts() {
    assert!(matches!(
        DecodedToken::from_string("header.payload.signature.extra"),
        Err(Error::FormatInvalid { found: 4 })
    ));
}

#[test]
fn test_two_parts_is_accepted() {
    // An unsigned token decodes identically to a signed one
    let token = create_valid_token();
    let unsigned: String = token.rsplit_once('.').map(|(head, _)| head.to_string()).unwrap();

    let decoded = DecodedToken::from_string(&unsigned).unwrap();
    assert_eq!(decoded.header(), &json!({"alg": "HS256", "typ": "JWT"}));
    assert_eq!(decoded.signature(), None);
    assert!(!decoded.is_signed());
}

#[test]
fn test_trailing_empty_signature() {
    // "header.payload." has 3 parts; the empty signature is captured as-is
    let token = create_valid_token();
    let unsigned: String = token.rsplit_once('.').map(|(head, _)| head.to_string()).unwrap();
    let trailing_dot = format!("{unsigned}.");

    let decoded = DecodedToken::from_string(&trailing_dot).unwrap();
    assert_eq!(decoded.signature(), Some(""));
    assert!(!decoded.is_signed());
}

#[test]
fn test_whitespace_is_not_trimmed() {
    let token = create_valid_token();

    // Whitespace lands inside a segment and fails Base64URL decoding
    assert!(DecodedToken::from_string(&format!(" {token}")).is_err());
    assert!(DecodedToken::from_string(&format!("{token} ")).is_err());
    assert!(DecodedToken::from_string(&format!("{token}\n")).is_err());
}

// ============================================================================
// Segment Content Edge Cases
// ============================================================================

#[test]
fn test_padded_segments_decode() {
    // Some tooling emits padded Base64; the decoder tolerates it
    let header = utils::base64url::encode(r#"{"alg":"HS256"}"#);
    let payload = "eyJzdWIiOiJhYiJ9"; // {"sub":"ab"}, length % 4 == 0
    let padded = format!("{header}.{payload}==.sig");
    // Padding on an already-complete group is ignored
    let decoded = DecodedToken::from_string(&padded);
    // Either way the unpadded form must decode
    let unpadded = format!("{header}.{payload}.sig");
    assert!(DecodedToken::from_string(&unpadded).is_ok());
    assert!(decoded.is_ok());
}

#[test]
fn test_unicode_payload() {
    let payload = r#"{"name":"すし","emoji":"🦀"}"#;
    let token = format!(
        "{}.{}.sig",
        utils::base64url::encode(r#"{"alg":"HS256"}"#),
        utils::base64url::encode(payload)
    );

    let decoded = DecodedToken::from_string(&token).unwrap();
    assert_eq!(decoded.payload()["name"], "すし");
    assert_eq!(decoded.payload()["emoji"], "🦀");
}

#[test]
fn test_invalid_utf8_segment() {
    let bad = utils::base64url::encode_bytes(&[0xff, 0xfe, 0xfd]);
    let token = format!(
        "{}.{}.sig",
        bad,
        utils::base64url::encode(r#"{"sub":"user"}"#)
    );
    assert!(matches!(
        DecodedToken::from_string(&token),
        Err(Error::FormatInvalidBase64(_))
    ));
}

#[test]
fn test_valid_base64_invalid_json() {
    let token = format!(
        "{}.{}.sig",
        utils::base64url::encode("{not json"),
        utils::base64url::encode(r#"{"sub":"user"}"#)
    );
    assert!(matches!(
        DecodedToken::from_string(&token),
        Err(Error::FormatInvalidJson(_))
    ));
}

#[test]
fn test_deeply_nested_payload() {
    let mut payload = String::new();
    for _ in 0..50 {
        payload.push_str(r#"{"n":"#);
    }
    payload.push('1');
    for _ in 0..50 {
        payload.push('}');
    }

    let token = format!(
        "{}.{}.sig",
        utils::base64url::encode(r#"{"alg":"HS256"}"#),
        utils::base64url::encode(&payload)
    );

    let decoded = DecodedToken::from_string(&token).unwrap();
    let rendered = render_tree(decoded.payload(), &TreeState::new(), false);
    assert!(rendered.contains("\"n\": 1"));
}

#[test]
fn test_oversized_token_rejected() {
    let huge = format!("a.{}.c", "b".repeat(70 * 1024));
    assert!(matches!(
        DecodedToken::from_string(&huge),
        Err(Error::TokenTooLarge { .. })
    ));
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_preserves_values() {
    let header = json!({"alg": "HS256", "typ": "JWT"});
    let payload = json!({
        "sub": "1234567890",
        "admin": true,
        "ratio": 0.5,
        "tags": ["a", "b"],
        "nested": {"deep": null}
    });

    let token = format!(
        "{}.{}.sig",
        utils::base64url::encode(&serde_json::to_string(&header).unwrap()),
        utils::base64url::encode(&serde_json::to_string(&payload).unwrap())
    );

    let decoded = DecodedToken::from_string(&token).unwrap();
    assert_eq!(decoded.header(), &header);
    assert_eq!(decoded.payload(), &payload);
}
