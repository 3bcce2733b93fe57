//! # vaultref-core
//!
//! Core library for vaultref providing:
//! - Configuration file parsing (vaultref.yaml)
//! - The error taxonomy shared by every vaultref crate
//! - Secret namespace, parameter kinds, and behaviour flags

pub mod config;
pub mod error;
pub mod types;

pub use config::VaultRefConfig;
pub use error::{Error, Result};
pub use types::{BehaviourFlags, Namespace, ParameterKind};
