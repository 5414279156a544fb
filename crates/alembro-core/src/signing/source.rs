use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// First platform API level exposing signing info (Android 9, API 28)
pub const MODERN_API_LEVEL: i32 = 28;

/// Platform API generation available for certificate retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityTier {
    /// Signing-info API with multi-signer enumeration
    Modern,
    /// Historical signature list only
    Legacy,
}

impl CapabilityTier {
    pub fn from_api_level(api_level: i32) -> Self {
        if api_level >= MODERN_API_LEVEL {
            CapabilityTier::Modern
        } else {
            CapabilityTier::Legacy
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CapabilityTier::Modern => "modern",
            CapabilityTier::Legacy => "legacy",
        }
    }
}

impl fmt::Display for CapabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapabilityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modern" => Ok(CapabilityTier::Modern),
            "legacy" => Ok(CapabilityTier::Legacy),
            _ => Err(format!("unknown capability tier: {} (expected modern or legacy)", s)),
        }
    }
}

/// Raw certificate blobs in the order the platform reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningCertificateSet(Vec<Vec<u8>>);

impl SigningCertificateSet {
    pub fn new(certificates: Vec<Vec<u8>>) -> Self {
        Self(certificates)
    }

    /// Positional first blob; no notion of "active" signer
    pub fn first(&self) -> Option<&[u8]> {
        self.0.first().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Vec<u8>>> for SigningCertificateSet {
    fn from(certificates: Vec<Vec<u8>>) -> Self {
        Self(certificates)
    }
}

impl FromIterator<Vec<u8>> for SigningCertificateSet {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Capability to enumerate the running application's signing certificates
pub trait CertificateSource: Send + Sync {
    /// API generation this source reads from
    fn tier(&self) -> CapabilityTier;

    /// Certificates as reported by the platform
    ///
    /// `Ok(None)` stands for an absent collection (a null field on the
    /// platform side), which callers treat like an empty one.
    fn signing_certificates(&self) -> Result<Option<SigningCertificateSet>, PlatformError>;
}

/// Pick the certificate source for a capability tier
///
/// Only the factory matching `tier` is invoked.
pub fn select_source<M, L>(
    tier: CapabilityTier,
    modern: impl FnOnce() -> M,
    legacy: impl FnOnce() -> L,
) -> Box<dyn CertificateSource>
where
    M: CertificateSource + 'static,
    L: CertificateSource + 'static,
{
    tracing::debug!(%tier, "selecting certificate source");
    match tier {
        CapabilityTier::Modern => Box::new(modern()),
        CapabilityTier::Legacy => Box::new(legacy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed(CapabilityTier);

    impl CertificateSource for Fixed {
        fn tier(&self) -> CapabilityTier {
            self.0
        }

        fn signing_certificates(&self) -> Result<Option<SigningCertificateSet>, PlatformError> {
            Ok(Some(SigningCertificateSet::new(vec![self.0.name().as_bytes().to_vec()])))
        }
    }

    #[test]
    fn test_tier_from_api_level() {
        assert_eq!(CapabilityTier::from_api_level(27), CapabilityTier::Legacy);
        assert_eq!(CapabilityTier::from_api_level(28), CapabilityTier::Modern);
        assert_eq!(CapabilityTier::from_api_level(34), CapabilityTier::Modern);
        assert_eq!(CapabilityTier::from_api_level(0), CapabilityTier::Legacy);
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("Modern".parse::<CapabilityTier>(), Ok(CapabilityTier::Modern));
        assert_eq!("legacy".parse::<CapabilityTier>(), Ok(CapabilityTier::Legacy));
        assert!("v2".parse::<CapabilityTier>().is_err());
    }

    #[test]
    fn test_select_source_invokes_exactly_one_factory() {
        for tier in [CapabilityTier::Modern, CapabilityTier::Legacy] {
            let modern_calls = Cell::new(0);
            let legacy_calls = Cell::new(0);

            let source = select_source(
                tier,
                || {
                    modern_calls.set(modern_calls.get() + 1);
                    Fixed(CapabilityTier::Modern)
                },
                || {
                    legacy_calls.set(legacy_calls.get() + 1);
                    Fixed(CapabilityTier::Legacy)
                },
            );

            assert_eq!(source.tier(), tier);
            assert_eq!(modern_calls.get() + legacy_calls.get(), 1);
            match tier {
                CapabilityTier::Modern => assert_eq!(modern_calls.get(), 1),
                CapabilityTier::Legacy => assert_eq!(legacy_calls.get(), 1),
            }
        }
    }

    #[test]
    fn test_certificate_set_order() {
        let set: SigningCertificateSet =
            vec![b"first".to_vec(), b"second".to_vec()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&b"first"[..]));
        assert_eq!(set, SigningCertificateSet::new(vec![b"first".to_vec(), b"second".to_vec()]));
        assert!(SigningCertificateSet::default().first().is_none());
    }
}
