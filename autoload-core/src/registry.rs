// Prefix table - namespace prefixes mapped to base directories

use std::path::{Path, PathBuf};

/// One registered (prefix, base path) mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderEntry {
    pub prefix: String,
    pub base_path: PathBuf,
    /// Whether this entry belongs to the handler installed at the front of the chain
    pub prepend: bool,
}

/// Base directory registered under a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathSlot {
    pub base_path: PathBuf,
    pub prepend: bool,
}

/// Registry of prefix mappings
///
/// Prefixes keep insertion order, and so do the paths under each prefix.
/// Re-adding an existing (prefix, path) pair overwrites its flag in place.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    prefixes: Vec<(String, Vec<PathSlot>)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for (prefix, base_path)
    pub fn add(&mut self, prefix: &str, base_path: impl Into<PathBuf>, prepend: bool) {
        let base_path = base_path.into();

        let index = match self.prefixes.iter().position(|(p, _)| p == prefix) {
            Some(index) => index,
            None => {
                self.prefixes.push((prefix.to_string(), Vec::new()));
                self.prefixes.len() - 1
            }
        };

        let slots = &mut self.prefixes[index].1;
        match slots.iter_mut().find(|slot| slot.base_path == base_path) {
            Some(slot) => slot.prepend = prepend,
            None => slots.push(PathSlot { base_path, prepend }),
        }
    }

    /// Remove one (prefix, base_path) pair; returns whether it existed
    pub fn remove(&mut self, prefix: &str, base_path: &Path) -> bool {
        let Some(index) = self.prefixes.iter().position(|(p, _)| p == prefix) else {
            return false;
        };

        let slots = &mut self.prefixes[index].1;
        let before = slots.len();
        slots.retain(|slot| slot.base_path != base_path);
        let removed = slots.len() != before;

        if slots.is_empty() {
            self.prefixes.remove(index);
        }

        removed
    }

    /// Remove every path registered under prefix; returns how many were dropped
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        match self.prefixes.iter().position(|(p, _)| p == prefix) {
            Some(index) => self.prefixes.remove(index).1.len(),
            None => 0,
        }
    }

    pub fn has(&self, prefix: &str, base_path: &Path) -> bool {
        self.slots(prefix)
            .is_some_and(|slots| slots.iter().any(|slot| slot.base_path == base_path))
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.slots(prefix).is_some_and(|slots| !slots.is_empty())
    }

    /// Number of entries carrying the given ordering flag
    pub fn group_len(&self, prepend: bool) -> usize {
        self.prefixes
            .iter()
            .flat_map(|(_, slots)| slots.iter())
            .filter(|slot| slot.prepend == prepend)
            .count()
    }

    /// Total number of (prefix, path) entries
    pub fn len(&self) -> usize {
        self.prefixes.iter().map(|(_, slots)| slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Registered prefixes in insertion order
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(|(p, _)| p.as_str())
    }

    /// Base paths under prefix in insertion order
    pub fn paths(&self, prefix: &str) -> Vec<PathBuf> {
        self.slots(prefix)
            .map(|slots| slots.iter().map(|slot| slot.base_path.clone()).collect())
            .unwrap_or_default()
    }

    /// Snapshot of every entry, prefix order first, then path order
    pub fn entries(&self) -> Vec<LoaderEntry> {
        self.prefixes
            .iter()
            .flat_map(|(prefix, slots)| {
                slots.iter().map(move |slot| LoaderEntry {
                    prefix: prefix.clone(),
                    base_path: slot.base_path.clone(),
                    prepend: slot.prepend,
                })
            })
            .collect()
    }

    /// Prefixes that literally start `class_name`, each with its base paths of the given flag
    ///
    /// Prefixes whose every path belongs to the other flag are left out.
    pub(crate) fn matching(&self, class_name: &str, prepend: bool) -> Vec<(String, Vec<PathBuf>)> {
        self.prefixes
            .iter()
            .filter(|(prefix, _)| class_name.starts_with(prefix.as_str()))
            .filter_map(|(prefix, slots)| {
                let paths: Vec<PathBuf> = slots
                    .iter()
                    .filter(|slot| slot.prepend == prepend)
                    .map(|slot| slot.base_path.clone())
                    .collect();
                (!paths.is_empty()).then(|| (prefix.clone(), paths))
            })
            .collect()
    }

    fn slots(&self, prefix: &str) -> Option<&Vec<PathSlot>> {
        self.prefixes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, slots)| slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_has() {
        let mut registry = Registry::new();
        registry.add("App\\", "/srv/app", false);

        assert!(registry.has("App\\", Path::new("/srv/app")));
        assert!(registry.has_prefix("App\\"));
        assert!(!registry.has("App\\", Path::new("/srv/other")));
    }

    #[test]
    fn test_readd_overwrites_flag() {
        let mut registry = Registry::new();
        registry.add("App\\", "/srv/app", false);
        registry.add("App\\", "/srv/app", true);

        assert_eq!(registry.paths("App\\").len(), 1);
        assert_eq!(registry.group_len(true), 1);
        assert_eq!(registry.group_len(false), 0);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = Registry::new();
        registry.add("App\\", "/a", false);
        registry.add("App\\", "/b", false);
        registry.add("App\\", "/a", true);

        assert_eq!(
            registry.paths("App\\"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_remove_last_path_drops_prefix() {
        let mut registry = Registry::new();
        registry.add("App\\", "/a", false);

        assert!(registry.remove("App\\", Path::new("/a")));
        assert!(!registry.has_prefix("App\\"));
        assert!(registry.is_empty());
        assert!(!registry.remove("App\\", Path::new("/a")));
    }

    #[test]
    fn test_remove_prefix() {
        let mut registry = Registry::new();
        registry.add("App\\", "/a", false);
        registry.add("App\\", "/b", true);
        registry.add("Lib\\", "/c", false);

        assert_eq!(registry.remove_prefix("App\\"), 2);
        assert!(!registry.has("App\\", Path::new("/a")));
        assert!(!registry.has("App\\", Path::new("/b")));
        assert!(registry.has("Lib\\", Path::new("/c")));
        assert_eq!(registry.remove_prefix("Missing\\"), 0);
    }

    #[test]
    fn test_matching_filters_by_flag_and_prefix() {
        let mut registry = Registry::new();
        registry.add("App\\", "/front", true);
        registry.add("App\\", "/back", false);
        registry.add("Lib\\", "/lib", false);

        let front = registry.matching("App\\User", true);
        assert_eq!(front, vec![("App\\".to_string(), vec![PathBuf::from("/front")])]);

        let back = registry.matching("Lib\\Vec", true);
        assert!(back.is_empty());
    }

    #[test]
    fn test_matching_registration_order() {
        let mut registry = Registry::new();
        registry.add("App\\", "/general", false);
        registry.add("App\\Models\\", "/models", false);

        let order: Vec<String> = registry
            .matching("App\\Models\\User", false)
            .into_iter()
            .map(|(prefix, _)| prefix)
            .collect();
        assert_eq!(order, vec!["App\\".to_string(), "App\\Models\\".to_string()]);
    }

    #[test]
    fn test_entries_snapshot() {
        let mut registry = Registry::new();
        registry.add("App\\", "/a", true);
        registry.add("Lib\\", "/b", false);

        let entries = registry.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].prefix, "App\\");
        assert!(entries[0].prepend);
        assert_eq!(entries[1].base_path, PathBuf::from("/b"));
    }
}
