//! Alembro Cryptography Library
//!
//! Digest primitives used to identify an application's signing certificate:
//! SHA-256 hashing, base64 encoding without line wrapping, and helpers to
//! load certificate blobs from DER or PEM files.

pub mod digest;
pub mod error;
pub mod hash;
pub mod utils;

pub use digest::{certificate_digest, CertificateDigest, DIGEST_LEN};
pub use error::{Error, Result};
pub use hash::{base64, sha256};
