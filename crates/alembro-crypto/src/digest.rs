//! Certificate digest
//!
//! The published identifier of a signing certificate is the base64 form of
//! the SHA-256 hash over the certificate's raw encoded bytes.

use crate::hash::{base64, sha256};

/// Length in bytes of a SHA-256 output
pub const DIGEST_LEN: usize = 32;

/// SHA-256 fingerprint of one certificate blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CertificateDigest([u8; DIGEST_LEN]);

impl CertificateDigest {
    /// Base64 with padding and no line breaks
    pub fn to_base64(&self) -> String {
        base64::encode(self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Compute the digest of a raw certificate blob
///
/// Empty blobs are hashed like any other input; deciding whether an empty
/// certificate is acceptable belongs to the caller.
///
/// # Example
/// ```
/// use alembro_crypto::certificate_digest;
///
/// let digest = certificate_digest(b"CERTA");
/// assert_eq!(digest.to_base64().len(), 44);
/// ```
pub fn certificate_digest(cert: &[u8]) -> CertificateDigest {
    CertificateDigest(sha256(cert))
}
