//! Command dispatcher
//!
//! One explicit object owned by whatever boundary carries requests; there is
//! no global channel registry. Dispatch is synchronous and single-shot.

use crate::{
    browser::{open_in_browser, BrowserLauncher},
    outcome::{messages, FailureKind, OperationOutcome},
    protocol::{parse_arguments, Arguments, Command, CommandKind, Endpoint},
    signing::SigningIdentityResolver,
};

pub struct Dispatcher {
    resolver: SigningIdentityResolver,
    launcher: Box<dyn BrowserLauncher>,
}

impl Dispatcher {
    pub fn new(resolver: SigningIdentityResolver, launcher: Box<dyn BrowserLauncher>) -> Self {
        Self { resolver, launcher }
    }

    /// Route a command by name, regardless of the endpoint it came from
    pub fn dispatch(&self, command: &str, arguments: Arguments) -> OperationOutcome {
        match Command::parse(command, arguments) {
            Some(command) => self.execute(&command),
            None => {
                tracing::debug!(command, "unknown command");
                OperationOutcome::not_implemented(command)
            }
        }
    }

    /// Route a command that arrived on `endpoint`
    ///
    /// Commands served by a different endpoint are unknown here.
    pub fn dispatch_on(
        &self,
        endpoint: Endpoint,
        command: &str,
        arguments: Arguments,
    ) -> OperationOutcome {
        match Command::parse(command, arguments) {
            Some(command) if command.kind().endpoint() == endpoint => self.execute(&command),
            _ => {
                tracing::debug!(%endpoint, command, "command not served on endpoint");
                OperationOutcome::not_implemented(command)
            }
        }
    }

    /// String form used by foreign boundaries: endpoint and command names
    /// plus the arguments as JSON text
    pub fn dispatch_json(&self, endpoint: &str, command: &str, arguments: &str) -> OperationOutcome {
        let Some(endpoint) = Endpoint::from_name(endpoint) else {
            tracing::debug!(endpoint, command, "unknown endpoint");
            return OperationOutcome::not_implemented(command);
        };
        match parse_arguments(arguments) {
            Ok(arguments) => self.dispatch_on(endpoint, command, arguments),
            Err(e) => {
                tracing::warn!(%endpoint, command, error = %e, "rejecting malformed arguments");
                OperationOutcome::failure(
                    FailureKind::InternalError,
                    format!("{}: {}", messages::INVALID_ARGUMENTS_PREFIX, e),
                )
            }
        }
    }

    fn execute(&self, command: &Command) -> OperationOutcome {
        tracing::debug!(command = %command.kind(), "dispatching");
        match command.kind() {
            CommandKind::OpenInBrowser => open_in_browser(self.launcher.as_ref(), command),
            CommandKind::GetSigningDigest => self.resolver.outcome(),
        }
    }
}
