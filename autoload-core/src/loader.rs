// Filesystem seam between the registry and the host

use crate::error::LoadError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem queries made while probing candidate files
///
/// Both methods default to the real filesystem.
pub trait FileProbe {
    /// Resolve a base directory to its canonical absolute form
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    /// Whether a candidate file exists
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Host-side loader: probes like [`FileProbe`] and executes the winning file
pub trait SourceLoader: FileProbe {
    /// Load and execute the source file at path
    fn load(&mut self, path: &Path) -> Result<(), LoadError>;
}

/// Probe backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileProbe for StdFs {}
