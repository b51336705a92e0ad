//! Namespace autoloading for Vex hosts
//!
//! An [`Autoloader`] maps namespace prefixes to base directories. Once
//! registered into a host's [`HandlerChain`], it loads the source file for a
//! class the first time the host asks for it:
//!
//! - prefix `App\` mapped to `/srv/app`
//! - class `App\Models\User` loads `/srv/app/Models/User.vx`
//!
//! Prefixes are literal string prefixes, tried in registration order.

pub mod autoloader;
pub mod config;
pub mod error;
pub mod handler;
pub mod loader;
pub mod manifest;
pub mod registry;
pub mod resolve;

pub use autoloader::Autoloader;
pub use config::{AutoloadConfig, DEFAULT_EXTENSION, DEFAULT_SEPARATOR};
pub use error::{ChainError, LoadError};
pub use handler::{ClassHandler, HandlerChain, PrefixHandler};
pub use loader::{FileProbe, SourceLoader, StdFs};
pub use manifest::{AutoloadManifest, NamespaceMapping, PathSpec};
pub use registry::{LoaderEntry, Registry};
pub use resolve::Resolution;
