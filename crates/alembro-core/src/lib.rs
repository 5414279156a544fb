//! Alembro Core
//!
//! Platform-independent half of the host bridge. A [`Dispatcher`] receives a
//! command name plus an argument map and routes it to one of two handlers:
//!
//! - `getSigningDigest`: the [`SigningIdentityResolver`] hashes the first
//!   signing certificate reported by a [`CertificateSource`].
//! - `openInBrowser`: hands a URL to a [`BrowserLauncher`].
//!
//! Every call yields exactly one [`OperationOutcome`]; platform faults never
//! escape a handler.

pub mod browser;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod protocol;
pub mod signing;

pub use browser::{open_in_browser, BrowserLauncher};
pub use dispatcher::Dispatcher;
pub use error::{CoreError, LaunchError, PlatformError, ResolveError, Result};
pub use outcome::{messages, FailureKind, OperationOutcome};
pub use protocol::{parse_arguments, Arguments, Command, CommandKind, Endpoint};
pub use signing::{
    select_source, CapabilityTier, CertificateSource, DigestResult, SigningCertificateSet,
    SigningIdentityResolver, MODERN_API_LEVEL,
};
