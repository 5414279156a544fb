//! Cryptographic hash functions and encoding utilities
//!
//! SHA-256 for certificate fingerprints and the base64 flavour the bridge
//! publishes them in.

pub mod base64;
pub mod sha;

pub use sha::sha256;
