use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dataset path {path:?} {reason}")]
    InvalidDataset { path: PathBuf, reason: &'static str },

    #[error("{failed} of {total} dataset(s) failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Prepare(#[from] s1prepare::Error),
}
