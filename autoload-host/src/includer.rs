// Script includer - reads class sources with include-once semantics

use autoload_core::{FileProbe, LoadError, SourceLoader};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Source loader for the reference runtime
///
/// Each file is read at most once; later loads of the same path are no-ops.
#[derive(Debug, Default)]
pub struct ScriptIncluder {
    sources: HashMap<PathBuf, String>,
    order: Vec<PathBuf>,
}

impl ScriptIncluder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files included so far, in load order
    pub fn included(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn is_included(&self, path: &Path) -> bool {
        self.sources.contains_key(path)
    }

    /// Source text of an included file
    pub fn source(&self, path: &Path) -> Option<&str> {
        self.sources.get(path).map(String::as_str)
    }
}

impl FileProbe for ScriptIncluder {}

impl SourceLoader for ScriptIncluder {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        if self.sources.contains_key(path) {
            log::debug!("Already included {}", path.display());
            return Ok(());
        }

        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.sources.insert(path.to_path_buf(), source);
        self.order.push(path.to_path_buf());
        Ok(())
    }
}
