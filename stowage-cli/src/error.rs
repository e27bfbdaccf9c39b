//! Error types for the CLI.

use crate::config::ConfigFileError;
use std::path::PathBuf;
use stowage_core::StowageError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),
    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
    #[error(transparent)]
    Config(#[from] ConfigFileError),
    #[error(transparent)]
    Stowage(#[from] StowageError),
}

pub type CliResult<T> = Result<T, CliError>;
