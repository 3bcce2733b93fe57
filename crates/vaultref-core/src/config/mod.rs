//! Configuration loading and management

mod loader;

pub use loader::{VaultRefConfig, CONFIG_FILE_NAMES, NAMESPACE_ENV_VAR};
