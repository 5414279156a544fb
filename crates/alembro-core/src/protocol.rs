//! Inbound request vocabulary: endpoints, commands and their arguments

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

/// Argument bag attached to a command
pub type Arguments = Map<String, Value>;

/// Logical request/response channel a command arrives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    BrowserLaunch,
    SignatureQuery,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::BrowserLaunch, Endpoint::SignatureQuery];

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::BrowserLaunch => "browser-launch",
            Endpoint::SignatureQuery => "signature-query",
        }
    }

    /// Channel names used by the first releases of the mobile app
    fn legacy_name(&self) -> &'static str {
        match self {
            Endpoint::BrowserLaunch => "abrir_chrome",
            Endpoint::SignatureQuery => "app_signature_channel",
        }
    }

    /// Resolve an endpoint by its current or legacy channel name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == name || endpoint.legacy_name() == name)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operation requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    OpenInBrowser,
    GetSigningDigest,
}

impl CommandKind {
    pub const ALL: [CommandKind; 2] = [CommandKind::OpenInBrowser, CommandKind::GetSigningDigest];

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::OpenInBrowser => "openInBrowser",
            CommandKind::GetSigningDigest => "getSigningDigest",
        }
    }

    fn legacy_name(&self) -> &'static str {
        match self {
            CommandKind::OpenInBrowser => "abrirNoChrome",
            CommandKind::GetSigningDigest => "getassinatura",
        }
    }

    /// Look up a command by wire name; matching is exact and case-sensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.legacy_name() == name)
    }

    /// The endpoint this command is served on
    pub fn endpoint(&self) -> Endpoint {
        match self {
            CommandKind::OpenInBrowser => Endpoint::BrowserLaunch,
            CommandKind::GetSigningDigest => Endpoint::SignatureQuery,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single inbound request, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: CommandKind,
    arguments: Arguments,
}

impl Command {
    pub fn new(kind: CommandKind, arguments: Arguments) -> Self {
        Self { kind, arguments }
    }

    /// Build a command from its wire name, `None` if the name is unknown
    pub fn parse(name: &str, arguments: Arguments) -> Option<Self> {
        CommandKind::from_name(name).map(|kind| Self::new(kind, arguments))
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// String argument lookup; non-string values count as absent
    pub fn str_argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(Value::as_str)
    }
}

/// Decode an argument bag from JSON text
///
/// Empty input and `null` both mean "no arguments".
pub fn parse_arguments(json: &str) -> Result<Arguments> {
    if json.trim().is_empty() {
        return Ok(Arguments::new());
    }
    match serde_json::from_str::<Value>(json)? {
        Value::Null => Ok(Arguments::new()),
        Value::Object(map) => Ok(map),
        other => Err(CoreError::ArgumentsNotAnObject(other.to_string())),
    }
}
