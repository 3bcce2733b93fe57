//! Secret reference resolution for vaultref
//!
//! Finds `%vault:name%` style references in parameter values and substitutes
//! them with secrets fetched out of band:
//! - **Grammar**: total `%key%` decomposition, rejected spans kept byte-exact
//! - **Scanning**: distinct references across a parameter set
//! - **Resolution**: per-value substitution with an `Unchanged` sentinel
//! - **Security**: zeroized secret values, audit logs that never carry values

pub mod extractor;
pub mod grammar;
pub mod injection;
pub mod pass;
pub mod resolver;
pub mod scanner;
pub mod security;
pub mod sources;
pub mod types;

pub use extractor::extract;
pub use injection::InjectionPlan;
pub use pass::{resolve_parameters, ResolvedParameters};
pub use resolver::{resolve, ReferenceResolver};
pub use scanner::scan;
pub use security::{AuditLog, SecureString};
pub use sources::{load_parameter_set, load_secret_mapping, SourceFormat};
pub use types::{ParameterSet, ReferenceKey, Resolution, ScanReport, SecretMapping};
pub use vaultref_core::Namespace;
