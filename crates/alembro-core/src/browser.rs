//! External browser hand-off
//!
//! The launcher itself lives with the host platform; the core only decides
//! how its result is reported.

use crate::{
    error::LaunchError,
    outcome::{messages, FailureKind, OperationOutcome},
    protocol::Command,
};

/// Opens a URL in one specific external application
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Handler for `openInBrowser`
///
/// Every launch failure, including a missing `url`, is reported as
/// `ActivityNotFound` with the fixed message.
pub fn open_in_browser(launcher: &dyn BrowserLauncher, command: &Command) -> OperationOutcome {
    let result = command
        .str_argument("url")
        .ok_or(LaunchError::MissingUrl)
        .and_then(|url| launcher.open(url));

    match result {
        Ok(()) => OperationOutcome::unit(),
        Err(e) => {
            tracing::warn!(error = %e, "browser launch failed");
            OperationOutcome::failure(FailureKind::ActivityNotFound, messages::ACTIVITY_NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{parse_arguments, CommandKind};
    use std::sync::Mutex;

    struct RecordingLauncher {
        installed: bool,
        opened: Mutex<Vec<String>>,
    }

    impl RecordingLauncher {
        fn new(installed: bool) -> Self {
            Self {
                installed,
                opened: Mutex::new(Vec::new()),
            }
        }
    }

    impl BrowserLauncher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<(), LaunchError> {
            if !self.installed {
                return Err(LaunchError::ActivityNotFound("com.android.chrome".to_string()));
            }
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn open_command(args: &str) -> Command {
        Command::new(CommandKind::OpenInBrowser, parse_arguments(args).unwrap())
    }

    #[test]
    fn test_launch_success() {
        let launcher = RecordingLauncher::new(true);
        let outcome = open_in_browser(&launcher, &open_command(r#"{"url":"https://alembro.com"}"#));

        assert_eq!(outcome, OperationOutcome::unit());
        assert_eq!(*launcher.opened.lock().unwrap(), vec!["https://alembro.com"]);
    }

    #[test]
    fn test_launch_target_absent() {
        let launcher = RecordingLauncher::new(false);
        let outcome = open_in_browser(&launcher, &open_command(r#"{"url":"https://alembro.com"}"#));

        assert_eq!(
            outcome,
            OperationOutcome::failure(FailureKind::ActivityNotFound, "Chrome não encontrado")
        );
    }

    #[test]
    fn test_missing_url_never_reaches_launcher() {
        let launcher = RecordingLauncher::new(true);
        let outcome = open_in_browser(&launcher, &open_command(r#"{"link":"https://alembro.com"}"#));

        assert_eq!(outcome.failure_kind(), Some(FailureKind::ActivityNotFound));
        assert!(launcher.opened.lock().unwrap().is_empty());
    }
}
