pub mod digest;
pub mod dispatch;
pub mod open;

use std::path::PathBuf;

use alembro_core::OperationOutcome;

use crate::error::{CliError, CliResult};

/// Certificate arguments as paths; unreadable files surface through the
/// certificate source like any other platform fault
fn certificate_paths(files: Vec<String>) -> Vec<PathBuf> {
    files.into_iter().map(PathBuf::from).collect()
}

/// Turn a failure outcome into a CLI error so the exit status is non-zero
fn into_result(outcome: OperationOutcome) -> CliResult<OperationOutcome> {
    match outcome {
        OperationOutcome::Failure { kind, message } => {
            Err(CliError::OperationFailed { kind, message })
        }
        success => Ok(success),
    }
}
