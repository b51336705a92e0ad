// Class name to file resolution

use crate::config::AutoloadConfig;
use crate::loader::FileProbe;
use std::path::PathBuf;

/// Outcome of asking a handler for a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The file at this path was loaded
    Loaded(PathBuf),
    /// Entries were searched and no candidate file exists
    NotFound,
    /// The handler has no entries of its ordering flag left and did nothing
    Declined,
}

impl Resolution {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Resolution::Loaded(_))
    }
}

/// Find the first existing candidate file for class_name
///
/// `candidates` is the registry's view of matching prefixes, already
/// filtered to one ordering flag, in registration order. The first file
/// that exists wins; prefix specificity plays no part.
pub(crate) fn find_file<P: FileProbe + ?Sized>(
    config: &AutoloadConfig,
    class_name: &str,
    candidates: &[(String, Vec<PathBuf>)],
    probe: &P,
) -> Option<PathBuf> {
    for (prefix, base_paths) in candidates {
        let Some(remainder) = class_name.strip_prefix(prefix.as_str()) else {
            log::trace!("{} does not start with {}", class_name, prefix);
            continue;
        };
        let relative = config.relative_file(remainder);

        for base_path in base_paths {
            let base = match probe.canonicalize(base_path) {
                Ok(base) => base,
                Err(err) => {
                    log::debug!(
                        "Skipping base path {} for {}: {}",
                        base_path.display(),
                        prefix,
                        err
                    );
                    continue;
                }
            };

            let candidate = base.join(&relative);
            log::debug!("Probing {} for {}", candidate.display(), class_name);
            if probe.exists(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}
