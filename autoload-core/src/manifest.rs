// Manifest parser - autoload.json

use crate::autoloader::Autoloader;
use crate::config::{default_extension, default_separator, AutoloadConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Autoload manifest (autoload.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoloadManifest {
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_separator")]
    pub separator: String,

    /// Namespace mappings, tried in the order listed
    #[serde(default)]
    pub namespaces: Vec<NamespaceMapping>,

    /// Directory relative paths are resolved against (the manifest's directory)
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// One prefix and the directories searched for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceMapping {
    pub prefix: String,

    pub paths: PathSpec,

    #[serde(default, skip_serializing_if = "is_false")]
    pub prepend: bool,
}

/// Paths can be a single directory or a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl PathSpec {
    pub fn as_vec(&self) -> Vec<&str> {
        match self {
            PathSpec::Single(path) => vec![path.as_str()],
            PathSpec::Multiple(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AutoloadManifest {
    /// Parse autoload.json from file; relative paths resolve against its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut manifest = Self::from_str(&content)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;
        manifest.root = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    /// Parse autoload.json from string
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest: AutoloadManifest =
            serde_json::from_str(content).context("Failed to parse autoload.json")?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Write manifest to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            anyhow::bail!("Extension cannot be empty");
        }

        for mapping in &self.namespaces {
            // An empty prefix would claim every class name
            if mapping.prefix.is_empty() {
                anyhow::bail!("Namespace prefix cannot be empty");
            }

            let paths = mapping.paths.as_vec();
            if paths.is_empty() {
                anyhow::bail!("No paths given for {}", mapping.prefix);
            }
            if paths.iter().any(|p| p.is_empty()) {
                anyhow::bail!("Empty path given for {}", mapping.prefix);
            }
        }

        Ok(())
    }

    pub fn config(&self) -> AutoloadConfig {
        AutoloadConfig::new(self.extension.clone(), self.separator.clone())
    }

    /// Resolve a manifest path against the manifest root
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Add every mapping to autoloader, in manifest order
    pub fn apply(&self, autoloader: &Autoloader) {
        for mapping in &self.namespaces {
            for path in mapping.paths.as_vec() {
                autoloader.add(&mapping.prefix, self.resolve_path(path), mapping.prepend);
            }
        }
    }
}

impl Autoloader {
    /// Build an autoloader configured and populated from a manifest
    pub fn from_manifest(manifest: &AutoloadManifest) -> Self {
        let autoloader = Autoloader::with_config(manifest.config());
        manifest.apply(&autoloader);
        autoloader
    }
}
