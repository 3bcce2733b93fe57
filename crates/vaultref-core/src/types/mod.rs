//! Type definitions for vaultref configuration and parameters

mod config_types;
mod namespace;
mod parameter_types;

pub use config_types::*;
pub use namespace::*;
pub use parameter_types::*;
