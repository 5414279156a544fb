//! SHA-256 hash functions
//!
//! Certificate fingerprints are always SHA-256; there is no algorithm
//! negotiation on the bridge.

use sha2::{Digest, Sha256 as Sha256Hasher};

/// Compute SHA-256 hash of data
///
/// # Arguments
/// * `data` - Data to hash
///
/// # Returns
/// 32-byte hash
///
/// # Example
/// ```
/// use alembro_crypto::hash::sha256;
///
/// let digest = sha256(b"CERTA");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        let data = b"certificate bytes";
        assert_eq!(sha256(data), sha256(data));
        assert_ne!(sha256(data), sha256(b"other certificate bytes"));
    }
}
