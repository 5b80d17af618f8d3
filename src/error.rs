use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("date override must be YYYY-MM-DD")]
    InvalidDate,

    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("could not allocate a unique filename after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("failed to determine current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
