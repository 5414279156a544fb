use alembro_crypto::{certificate_digest, CertificateDigest};
use serde_json::{json, Value};

use super::source::{select_source, CapabilityTier, CertificateSource};
use crate::{
    error::ResolveError,
    outcome::{messages, FailureKind, OperationOutcome},
};

/// Digest identifying the application's signing certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestResult {
    digest: CertificateDigest,
    tier: CapabilityTier,
    certificate_count: usize,
}

impl DigestResult {
    /// Base64, padded, no line breaks
    pub fn as_base64(&self) -> String {
        self.digest.to_base64()
    }

    pub fn to_hex(&self) -> String {
        self.digest.to_hex()
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    /// How many certificates the platform reported; only the first is hashed
    pub fn certificate_count(&self) -> usize {
        self.certificate_count
    }

    /// Payload returned on the signature-query endpoint
    pub fn to_value(&self) -> Value {
        json!({ "digest": self.as_base64() })
    }
}

/// Produces the signing digest of the running application
///
/// Stateless: every call reads the certificate source afresh, so one
/// resolver can serve concurrent callers.
pub struct SigningIdentityResolver {
    source: Box<dyn CertificateSource>,
}

impl SigningIdentityResolver {
    pub fn new(source: Box<dyn CertificateSource>) -> Self {
        Self { source }
    }

    /// Build a resolver for `tier`, constructing only the matching source
    pub fn for_tier<M, L>(
        tier: CapabilityTier,
        modern: impl FnOnce() -> M,
        legacy: impl FnOnce() -> L,
    ) -> Self
    where
        M: CertificateSource + 'static,
        L: CertificateSource + 'static,
    {
        Self::new(select_source(tier, modern, legacy))
    }

    pub fn tier(&self) -> CapabilityTier {
        self.source.tier()
    }

    /// Hash the first reported certificate
    ///
    /// The first blob is taken positionally. Under key rotation the platform
    /// may list more than one signer and the first is not guaranteed to be
    /// the currently active one.
    pub fn resolve(&self) -> Result<DigestResult, ResolveError> {
        let tier = self.source.tier();
        let certificates = self
            .source
            .signing_certificates()?
            .filter(|set| !set.is_empty())
            .ok_or(ResolveError::NoSignature)?;
        let first = certificates.first().ok_or(ResolveError::NoSignature)?;

        if certificates.len() > 1 {
            tracing::warn!(
                %tier,
                certificate_count = certificates.len(),
                "multiple signing certificates reported, hashing the first"
            );
        }

        let result = DigestResult {
            digest: certificate_digest(first),
            tier,
            certificate_count: certificates.len(),
        };
        tracing::debug!(%tier, certificate_count = result.certificate_count, "signing digest resolved");
        Ok(result)
    }

    /// Run [`resolve`](Self::resolve) and convert the result for the caller
    pub fn outcome(&self) -> OperationOutcome {
        match self.resolve() {
            Ok(result) => OperationOutcome::success(result.to_value()),
            Err(ResolveError::NoSignature) => {
                tracing::warn!(tier = %self.tier(), "no signing certificate found");
                OperationOutcome::failure(FailureKind::NoSignature, messages::NO_SIGNATURE)
            }
            Err(ResolveError::Platform(e)) => {
                tracing::warn!(tier = %self.tier(), error = %e, "signing certificate lookup failed");
                OperationOutcome::failure(
                    FailureKind::InternalError,
                    format!("{}: {}", messages::INTERNAL_ERROR_PREFIX, e),
                )
            }
        }
    }
}
