//! Reference host for `autoload-core`
//!
//! Provides the pieces a real interpreter would own: the ordered handler
//! chain, the set of defined classes, and the file includer.

use thiserror::Error;

pub mod includer;
pub mod runtime;

pub use includer::ScriptIncluder;
pub use runtime::{HostConfig, Runtime};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    #[error(transparent)]
    Load(#[from] autoload_core::LoadError),
}
