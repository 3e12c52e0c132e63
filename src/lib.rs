//! # jwtlens - Inspect JSON Web Tokens in the Terminal
//!
//! > Decode JWTs locally and render them as collapsible JSON trees.
//!
//! **jwtlens** splits a token into its dot-delimited segments, Base64URL-decodes
//! the header and payload, parses each as JSON, and renders the result as an
//! indented, optionally colorized tree. Everything happens in-process on the
//! string you provide: there is no network call, no persistence, and — by
//! design — no signature verification or claims validation. The signature
//! segment, when present, is reported but never decoded.
//!
//! ## Quick Start
//!
//! ```
//! use jwtlens::{decode, render_tree, TreeState};
//!
//! let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.sig";
//!
//! let decoded = decode(token).unwrap().expect("not blank");
//! assert_eq!(decoded.payload()["sub"], "1234567890");
//!
//! let rendered = render_tree(decoded.payload(), &TreeState::new(), false);
//! assert!(rendered.contains("\"sub\": \"1234567890\""));
//! ```
//!
//! ## Decoding
//!
//! [`decode`] is the top-level entry point: blank input yields `Ok(None)`
//! (the idle state), anything else is handed untrimmed to
//! [`DecodedToken::from_string`]. Both the signed `header.payload.signature`
//! form and the unsigned `header.payload` form are accepted; segment counts
//! outside that range fail with [`Error::FormatInvalid`]. Header and payload
//! are arbitrary JSON values — no schema is enforced — and object key order
//! is preserved exactly as it appears in the token.
//!
//! ## Rendering
//!
//! [`render_tree`] walks any `serde_json::Value` and produces indented
//! terminal output with type-specific colors. [`TreeState`] holds the set of
//! collapsed nodes, addressed by JSON Pointer path; a collapsed container
//! renders as a compact item-count summary (`{… 3 entries}`) while its
//! siblings keep their own state. With no collapsed nodes and color off the
//! output is byte-identical to `serde_json::to_string_pretty`.
//!
//! ## Security
//!
//! Decoding a token proves nothing about it. **jwtlens** shows you what a
//! token *claims*; whether to believe it is a question for a verification
//! library. Input is bounded (64KB token, per-segment decoded size limits)
//! so arbitrarily large pastes cannot exhaust memory.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648) — Base64URL encoding
//! - [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) — JSON Pointer

// Core modules
pub mod error;
pub mod utils;

// Token decoding
pub mod token;

// Display-only claims summary
pub mod claims;

// Tree rendering
pub mod tree;

pub(crate) mod limits;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use claims::{format_timestamp, Audience, RegisteredClaims};
pub use error::{Error, Result};
pub use token::{decode, DecodedToken, TokenHeader};
pub use tree::{escape_pointer_token, render_tree, TreeState};
