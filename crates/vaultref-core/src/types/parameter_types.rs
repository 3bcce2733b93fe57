//! Parameter kinds and behaviour flags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour parameter enabling environment-variable injection
pub const EXPOSE_ENV_PARAMETER: &str = "vaultref.set.env";

/// Behaviour parameter enabling configuration-parameter injection
pub const EXPOSE_CONFIG_PARAMETER: &str = "vaultref.set.config";

const ENV_PREFIX: &str = "env.";
const SYSTEM_PREFIX: &str = "system.";

/// Kind of a parameter, derived from its name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// `env.NAME` - exported as environment variable `NAME`
    Environment,
    /// `system.NAME` - system property
    System,
    /// Any other name
    Config,
}

impl ParameterKind {
    /// Classify a parameter name
    pub fn of(name: &str) -> Self {
        if name.starts_with(ENV_PREFIX) {
            ParameterKind::Environment
        } else if name.starts_with(SYSTEM_PREFIX) {
            ParameterKind::System
        } else {
            ParameterKind::Config
        }
    }

    /// Environment variable name for an `env.` parameter
    pub fn env_var_name(name: &str) -> Option<&str> {
        name.strip_prefix(ENV_PREFIX).filter(|n| !n.is_empty())
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Environment => write!(f, "env"),
            ParameterKind::System => write!(f, "system"),
            ParameterKind::Config => write!(f, "config"),
        }
    }
}

/// Which kinds of resolved parameters may be written back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourFlags {
    /// Expose resolved `env.` parameters as environment variables
    #[serde(default)]
    pub expose_env: bool,

    /// Expose resolved configuration and system parameters
    #[serde(default)]
    pub expose_config: bool,
}

impl BehaviourFlags {
    /// Read flags from a parameter set, falling back to `defaults` per flag
    pub fn from_parameters<'a, I>(parameters: I, defaults: BehaviourFlags) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut flags = defaults;
        for (name, value) in parameters {
            match name.as_str() {
                EXPOSE_ENV_PARAMETER => flags.expose_env = parse_flag(value),
                EXPOSE_CONFIG_PARAMETER => flags.expose_config = parse_flag(value),
                _ => {}
            }
        }
        flags
    }

    /// Whether updates of `kind` may be exposed
    pub fn allows(&self, kind: ParameterKind) -> bool {
        match kind {
            ParameterKind::Environment => self.expose_env,
            ParameterKind::System | ParameterKind::Config => self.expose_config,
        }
    }
}

/// `true` ignoring ASCII case is on; anything else is off
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Treat an empty string as absent
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
