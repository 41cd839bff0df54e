//! Fatal scan errors
//!
//! Only conditions that make the whole scan meaningless live here. Per-file and
//! per-directory problems are recorded inline in the model instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("repository root does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("repository root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("repository unreadable: {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to start extraction workers: {0}")]
    ThreadPool(String),
}

pub type ScanResult<T> = Result<T, ScanError>;
