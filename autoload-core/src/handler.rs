// Resolution handlers and the host chain they are installed into

use crate::autoloader::Shared;
use crate::error::{ChainError, LoadError};
use crate::loader::SourceLoader;
use crate::resolve::{find_file, Resolution};
use std::fmt;
use std::rc::Rc;

/// Something the host can ask to define a class
pub trait ClassHandler {
    /// Try to make class_name defined by loading its source through loader
    fn resolve(
        &self,
        class_name: &str,
        loader: &mut dyn SourceLoader,
    ) -> Result<Resolution, LoadError>;
}

/// Host facility holding the ordered chain of class handlers
///
/// `prepend = true` places the handler ahead of those already installed.
pub trait HandlerChain {
    fn install(&mut self, handler: Box<dyn ClassHandler>, prepend: bool)
        -> Result<(), ChainError>;
}

/// Handler bound to one ordering flag of an autoloader's registry
///
/// Reads the registry live on every call, so entries added or removed after
/// installation are honoured.
pub struct PrefixHandler {
    shared: Rc<Shared>,
    prepend: bool,
}

impl PrefixHandler {
    pub(crate) fn new(shared: Rc<Shared>, prepend: bool) -> Self {
        Self { shared, prepend }
    }

    pub fn prepend(&self) -> bool {
        self.prepend
    }
}

impl ClassHandler for PrefixHandler {
    fn resolve(
        &self,
        class_name: &str,
        loader: &mut dyn SourceLoader,
    ) -> Result<Resolution, LoadError> {
        // Snapshot under the borrow; loading may re-enter the registry
        let candidates = {
            let registry = self.shared.registry.borrow();
            if registry.group_len(self.prepend) == 0 {
                log::debug!(
                    "No prepend={} entries left, declining {}",
                    self.prepend,
                    class_name
                );
                return Ok(Resolution::Declined);
            }
            registry.matching(class_name, self.prepend)
        };

        let Some(path) = find_file(&self.shared.config, class_name, &candidates, &*loader) else {
            return Ok(Resolution::NotFound);
        };

        loader.load(&path)?;
        log::debug!("Loaded {} from {}", class_name, path.display());
        Ok(Resolution::Loaded(path))
    }
}

impl fmt::Debug for PrefixHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixHandler")
            .field("prepend", &self.prepend)
            .finish()
    }
}
