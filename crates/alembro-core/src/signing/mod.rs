//! Signing identity resolution
//!
//! The platform reports signing certificates through one of two API
//! generations. A [`CertificateSource`] hides which one is in use; the
//! [`SigningIdentityResolver`] is written against that capability only.

mod resolver;
mod source;

pub use resolver::{DigestResult, SigningIdentityResolver};
pub use source::{
    select_source, CapabilityTier, CertificateSource, SigningCertificateSet, MODERN_API_LEVEL,
};
