// Reference host runtime with an on-demand class resolution chain

use crate::includer::ScriptIncluder;
use crate::HostError;
use autoload_core::{ChainError, ClassHandler, HandlerChain, Resolution};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// Refuse handler installation beyond this many handlers
    pub max_handlers: Option<usize>,
}

/// Minimal host: a set of defined classes plus a handler chain
///
/// `require_class` walks the chain front to back until one handler loads a
/// file for the class, and reports the class as missing otherwise.
pub struct Runtime {
    config: HostConfig,
    chain: VecDeque<Box<dyn ClassHandler>>,
    defined: HashSet<String>,
    origins: Vec<(String, PathBuf)>,
    includer: ScriptIncluder,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            chain: VecDeque::new(),
            defined: HashSet::new(),
            origins: Vec::new(),
            includer: ScriptIncluder::new(),
        }
    }

    /// Declare a class as defined without loading anything
    pub fn define(&mut self, class_name: &str) {
        self.defined.insert(class_name.to_string());
    }

    pub fn is_defined(&self, class_name: &str) -> bool {
        self.defined.contains(class_name)
    }

    /// Make sure class_name is defined, consulting the handler chain if needed
    pub fn require_class(&mut self, class_name: &str) -> Result<(), HostError> {
        if self.defined.contains(class_name) {
            return Ok(());
        }

        for handler in &self.chain {
            match handler.resolve(class_name, &mut self.includer)? {
                Resolution::Loaded(path) => {
                    self.defined.insert(class_name.to_string());
                    self.origins.push((class_name.to_string(), path));
                    return Ok(());
                }
                Resolution::NotFound | Resolution::Declined => continue,
            }
        }

        Err(HostError::ClassNotFound(class_name.to_string()))
    }

    /// File a class was loaded from, if a handler loaded it
    pub fn origin(&self, class_name: &str) -> Option<&PathBuf> {
        self.origins
            .iter()
            .find(|(name, _)| name == class_name)
            .map(|(_, path)| path)
    }

    pub fn handler_count(&self) -> usize {
        self.chain.len()
    }

    pub fn includer(&self) -> &ScriptIncluder {
        &self.includer
    }
}

impl HandlerChain for Runtime {
    fn install(
        &mut self,
        handler: Box<dyn ClassHandler>,
        prepend: bool,
    ) -> Result<(), ChainError> {
        if let Some(limit) = self.config.max_handlers {
            if self.chain.len() >= limit {
                return Err(ChainError::Full { limit });
            }
        }

        if prepend {
            self.chain.push_front(handler);
        } else {
            self.chain.push_back(handler);
        }
        Ok(())
    }
}
