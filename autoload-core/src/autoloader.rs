// Autoloader - owned registry plus handler installation

use crate::config::AutoloadConfig;
use crate::handler::{HandlerChain, PrefixHandler};
use crate::loader::{FileProbe, StdFs};
use crate::registry::{LoaderEntry, Registry};
use crate::resolve::find_file;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// State shared between an autoloader and the handlers it installed
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) registry: RefCell<Registry>,
    pub(crate) config: AutoloadConfig,
}

/// Namespace prefix autoloader
///
/// Owns the prefix registry. Handlers installed by [`Autoloader::register`]
/// hold a reference to the same registry, so later `add`/`remove` calls are
/// visible to them.
#[derive(Debug)]
pub struct Autoloader {
    shared: Rc<Shared>,
    installed: Cell<usize>,
}

impl Default for Autoloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Autoloader {
    pub fn new() -> Self {
        Self::with_config(AutoloadConfig::default())
    }

    /// Unlike the manifest, an empty extension is accepted here; class
    /// files are then probed without any extension.
    pub fn with_config(config: AutoloadConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                registry: RefCell::new(Registry::new()),
                config,
            }),
            installed: Cell::new(0),
        }
    }

    pub fn config(&self) -> &AutoloadConfig {
        &self.shared.config
    }

    /// Map prefix to base_path, overwriting the flag if the pair exists
    ///
    /// The prefix is matched as a literal string; include the trailing
    /// separator (`"App\\"`) unless partial-segment matches are wanted.
    /// An empty prefix matches every class. The base path is only checked
    /// when a class is resolved.
    pub fn add(&self, prefix: &str, base_path: impl Into<PathBuf>, prepend: bool) {
        self.shared
            .registry
            .borrow_mut()
            .add(prefix, base_path, prepend);
    }

    /// Remove the (prefix, base_path) pair if present
    pub fn remove(&self, prefix: &str, base_path: impl AsRef<Path>) {
        self.shared
            .registry
            .borrow_mut()
            .remove(prefix, base_path.as_ref());
    }

    /// Remove every base path registered under prefix
    pub fn remove_prefix(&self, prefix: &str) {
        self.shared.registry.borrow_mut().remove_prefix(prefix);
    }

    pub fn has(&self, prefix: &str, base_path: impl AsRef<Path>) -> bool {
        self.shared
            .registry
            .borrow()
            .has(prefix, base_path.as_ref())
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.shared.registry.borrow().has_prefix(prefix)
    }

    /// Install one handler per ordering flag that currently has entries
    ///
    /// The prepend handler goes in first, then the append handler. A rejected
    /// installation is logged and does not stop the other one. Returns the
    /// number of handlers installed by this call.
    ///
    /// Calling this twice installs the handlers twice; check
    /// [`Autoloader::is_registered`] first if that matters to the host.
    pub fn register<C: HandlerChain + ?Sized>(&self, chain: &mut C) -> usize {
        let mut installed = 0;

        for prepend in [true, false] {
            if self.group_len(prepend) == 0 {
                continue;
            }

            let handler = PrefixHandler::new(Rc::clone(&self.shared), prepend);
            match chain.install(Box::new(handler), prepend) {
                Ok(()) => {
                    log::info!("Installed autoload handler (prepend={})", prepend);
                    installed += 1;
                }
                Err(err) => {
                    log::warn!(
                        "Failed to install autoload handler (prepend={}): {}",
                        prepend,
                        err
                    );
                }
            }
        }

        self.installed.set(self.installed.get() + installed);
        installed
    }

    /// Whether any earlier `register` call installed a handler
    pub fn is_registered(&self) -> bool {
        self.installed.get() > 0
    }

    /// Find the file that would be loaded for class_name, without loading it
    pub fn locate(&self, class_name: &str, prepend: bool) -> Option<PathBuf> {
        self.locate_with(class_name, prepend, &StdFs)
    }

    /// Like [`Autoloader::locate`], probing through a custom filesystem
    pub fn locate_with<P: FileProbe + ?Sized>(
        &self,
        class_name: &str,
        prepend: bool,
        probe: &P,
    ) -> Option<PathBuf> {
        let candidates = self
            .shared
            .registry
            .borrow()
            .matching(class_name, prepend);
        find_file(&self.shared.config, class_name, &candidates, probe)
    }

    /// Number of entries carrying the given ordering flag
    pub fn group_len(&self, prepend: bool) -> usize {
        self.shared.registry.borrow().group_len(prepend)
    }

    /// Registered prefixes in insertion order
    pub fn prefixes(&self) -> Vec<String> {
        self.shared
            .registry
            .borrow()
            .prefixes()
            .map(str::to_string)
            .collect()
    }

    /// Base paths under prefix in insertion order
    pub fn paths(&self, prefix: &str) -> Vec<PathBuf> {
        self.shared.registry.borrow().paths(prefix)
    }

    pub fn entries(&self) -> Vec<LoaderEntry> {
        self.shared.registry.borrow().entries()
    }

    pub fn len(&self) -> usize {
        self.shared.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.registry.borrow().is_empty()
    }
}
