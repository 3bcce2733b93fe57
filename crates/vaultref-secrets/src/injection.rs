//! Partitioning resolved parameters by kind and behaviour flags

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;
use vaultref_core::{BehaviourFlags, ParameterKind};

/// Resolved values allowed out, grouped by destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjectionPlan {
    /// Environment variable name -> value
    pub environment: BTreeMap<String, String>,
    /// Config or system parameter name -> value
    pub parameters: BTreeMap<String, String>,
    /// Parameter names held back by the behaviour flags
    pub withheld: BTreeSet<String>,
}

impl InjectionPlan {
    /// Partition `updates` according to `flags`
    pub fn build(updates: &BTreeMap<String, String>, flags: BehaviourFlags) -> Self {
        let mut plan = InjectionPlan::default();

        for (name, value) in updates {
            let kind = ParameterKind::of(name);
            if !flags.allows(kind) {
                plan.withheld.insert(name.clone());
                continue;
            }

            match kind {
                ParameterKind::Environment => match ParameterKind::env_var_name(name) {
                    Some(var) => {
                        plan.environment.insert(var.to_string(), value.clone());
                    }
                    None => {
                        plan.withheld.insert(name.clone());
                    }
                },
                ParameterKind::System | ParameterKind::Config => {
                    plan.parameters.insert(name.clone(), value.clone());
                }
            }
        }

        if !plan.withheld.is_empty() {
            info!(
                withheld = plan.withheld.len(),
                expose_env = flags.expose_env,
                expose_config = flags.expose_config,
                "Resolved parameters withheld by behaviour flags"
            );
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.environment.is_empty() && self.parameters.is_empty()
    }
}
