//! Host-side collaborators
//!
//! Certificates come from files instead of a package manager, and URLs are
//! handed to a local browser program.

use std::{
    io,
    path::PathBuf,
    process::{Command, Stdio},
};

use alembro_core::{
    BrowserLauncher, CapabilityTier, CertificateSource, Dispatcher, LaunchError, PlatformError,
    SigningCertificateSet, SigningIdentityResolver,
};
use alembro_crypto::utils::load_certificates_from_file;

/// Reads certificate blobs from DER or PEM files, in argument order
#[derive(Debug, Clone)]
pub struct FileCertificateSource {
    tier: CapabilityTier,
    paths: Vec<PathBuf>,
}

impl FileCertificateSource {
    pub fn new(tier: CapabilityTier, paths: Vec<PathBuf>) -> Self {
        Self { tier, paths }
    }
}

impl CertificateSource for FileCertificateSource {
    fn tier(&self) -> CapabilityTier {
        self.tier
    }

    /// No files means no collection at all
    fn signing_certificates(&self) -> Result<Option<SigningCertificateSet>, PlatformError> {
        if self.paths.is_empty() {
            return Ok(None);
        }

        let mut blobs = Vec::new();
        for path in &self.paths {
            let certs = load_certificates_from_file(path).map_err(|e| match e {
                alembro_crypto::Error::IoError(err) if err.kind() == io::ErrorKind::NotFound => {
                    PlatformError::PackageInfoUnavailable(format!("{}: {}", path.display(), err))
                }
                alembro_crypto::Error::IoError(err)
                    if err.kind() == io::ErrorKind::PermissionDenied =>
                {
                    PlatformError::AccessDenied(format!("{}: {}", path.display(), err))
                }
                other => PlatformError::CallFailed(format!("{}: {}", path.display(), other)),
            })?;
            blobs.extend(certs);
        }
        Ok(Some(blobs.into()))
    }
}

/// Spawns `program <url>` and does not wait for it
///
/// The child is detached, never reaped: the browser outlives the CLI run,
/// and once the CLI exits the child is re-parented and collected by init.
#[derive(Debug, Clone)]
pub struct ProcessBrowserLauncher {
    program: String,
}

impl ProcessBrowserLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl BrowserLauncher for ProcessBrowserLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|child| {
                tracing::debug!(program = %self.program, pid = child.id(), "browser launched");
                // Dropping a Child neither kills nor waits on it
                drop(child);
            })
            .map_err(|e| LaunchError::ActivityNotFound(format!("{}: {}", self.program, e)))
    }
}

/// Dispatcher wired to the host collaborators
pub fn host_dispatcher(
    tier: CapabilityTier,
    certificates: Vec<PathBuf>,
    browser: &str,
) -> Dispatcher {
    Dispatcher::new(
        host_resolver(tier, certificates),
        Box::new(ProcessBrowserLauncher::new(browser)),
    )
}

pub fn host_resolver(tier: CapabilityTier, certificates: Vec<PathBuf>) -> SigningIdentityResolver {
    SigningIdentityResolver::for_tier(
        tier,
        || FileCertificateSource::new(CapabilityTier::Modern, certificates.clone()),
        || FileCertificateSource::new(CapabilityTier::Legacy, certificates.clone()),
    )
}
