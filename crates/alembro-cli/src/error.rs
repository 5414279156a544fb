use alembro_core::{FailureKind, ResolveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{kind}: {message}")]
    OperationFailed { kind: FailureKind, message: String },
}

pub type CliResult<T> = Result<T, CliError>;
