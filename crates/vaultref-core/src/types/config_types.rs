//! Configuration types for vaultref.yaml

use super::{BehaviourFlags, Namespace};
use serde::{Deserialize, Serialize};

/// Root vaultref.yaml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultRefConfigFile {
    /// Secret namespace prefix (e.g., "vault:")
    #[serde(default)]
    pub namespace: Namespace,

    /// Default behaviour flags, overridable per parameter set
    #[serde(default)]
    pub behaviour: BehaviourFlags,

    /// Turn leftover in-scope references into a failure
    #[serde(default)]
    pub fail_on_unresolved: bool,
}
