use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a configuration store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings file {path} must contain a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no workspace settings file is configured")]
    NoWorkspace,

    #[error("update of \"{key}\" was rejected: {reason}")]
    Rejected { key: String, reason: String },
}

/// Errors surfaced by font size commands
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to update \"{key}\": {source}")]
    Persistence {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("setting \"{key}\" is not set")]
    MissingSetting { key: String },

    #[error("setting \"{key}\" must be a number, found {value}")]
    InvalidSetting { key: String, value: serde_json::Value },

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("unknown surface \"{0}\"")]
    UnknownSurface(String),

    #[error("{} updates failed: {}", .0.len(), join_errors(.0))]
    Multiple(Vec<Error>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Collapse a list of failures: none is `Ok`, one is returned as-is
    pub fn aggregate(mut errors: Vec<Error>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Error::Multiple(errors)),
        }
    }
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
