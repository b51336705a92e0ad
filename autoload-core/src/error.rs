// Error types shared between the registry and its host

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raised by a host when it refuses to install a resolution handler
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Handler chain is full ({limit} handlers installed)")]
    Full { limit: usize },

    #[error("Handler chain rejected installation: {0}")]
    Rejected(String),
}

/// Raised by a host while loading a candidate file that exists
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to execute {}: {message}", .path.display())]
    Execution { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Execution { path, .. } => path,
        }
    }
}
