//! Base64 utilities for published digests
//!
//! Digests leave the bridge as standard RFC 4648 base64 with padding and
//! without any line breaks (the `NO_WRAP` flavour on Android). The
//! `base64` crate engines never wrap, so the standard engine is used as is.
//!
//! ## Examples
//! ```
//! use alembro_crypto::base64;
//!
//! let encoded = base64::encode(b"Hello, World!");
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(base64::decode(&encoded).unwrap(), b"Hello, World!");
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::Result;

/// Encode bytes to standard base64 string with padding and no line breaks
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 string to bytes
///
/// Expects padding with `=` characters. Embedded whitespace is rejected.
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
