// Internal modules
mod decoded;
mod header;

// Public API exports
pub use decoded::{decode, DecodedToken};
pub use header::TokenHeader;
