// Configuration for class-name to file mapping

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// File extension appended to every resolved class file
pub const DEFAULT_EXTENSION: &str = "vx";

/// Separator between namespace segments in a class name
pub const DEFAULT_SEPARATOR: &str = "\\";

/// Autoload configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoloadConfig {
    /// Source file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Namespace separator used in class names
    #[serde(default = "default_separator")]
    pub separator: String,
}

pub(crate) fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

pub(crate) fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for AutoloadConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            separator: default_separator(),
        }
    }
}

impl AutoloadConfig {
    pub fn new(extension: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            separator: separator.into(),
        }
    }

    /// Convert the part of a class name left after its prefix into a relative file path
    ///
    /// `"\\Models\\User"` becomes `Models/User.vx` on unix hosts. Only plain
    /// segments survive, so the result never has a root and always stays
    /// under the base path it is joined to. An empty extension adds no dot.
    pub fn relative_file(&self, remainder: &str) -> PathBuf {
        let segments: Vec<&str> = if self.separator.is_empty() {
            vec![remainder]
        } else {
            remainder.split(self.separator.as_str()).collect()
        };

        let mut relative: PathBuf = segments
            .into_iter()
            .flat_map(|segment| Path::new(segment).components())
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();

        if !self.extension.is_empty() {
            if let Some(name) = relative.file_name() {
                let mut name = name.to_os_string();
                name.push(".");
                name.push(&self.extension);
                relative.set_file_name(name);
            }
        }

        relative
    }
}
