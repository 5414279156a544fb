//! 核心错误类型

use thiserror::Error;

/// Failure reported by the platform while reading package metadata
///
/// The payload is the platform's own message and is surfaced verbatim to
/// callers for diagnosis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Package info for the running application could not be obtained
    #[error("package info unavailable: {0}")]
    PackageInfoUnavailable(String),

    /// The platform refused access (security manager or similar)
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Any other platform call failure
    #[error("{0}")]
    CallFailed(String),
}

/// Error type of the signing identity resolver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The certificate collection was absent or empty
    #[error("no signing certificate found")]
    NoSignature,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Error type of browser launchers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// The target application is not installed or refused the request
    #[error("browser not available: {0}")]
    ActivityNotFound(String),

    /// No URL was supplied
    #[error("missing url argument")]
    MissingUrl,
}

/// Errors raised while decoding an inbound request
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error("Arguments must be a JSON object, got: {0}")]
    ArgumentsNotAnObject(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, CoreError>;
