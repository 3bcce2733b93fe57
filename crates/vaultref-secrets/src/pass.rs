//! Resolution over a whole parameter set
//!
//! Runs the resolver per parameter, keeps only the values that changed, and
//! reports in-scope references left behind in the final text.

use crate::extractor::extract;
use crate::resolver::ReferenceResolver;
use crate::security::AuditLog;
use crate::types::{ReferenceKey, SecretMapping};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, warn};
use vaultref_core::Namespace;

/// Outcome of resolving a parameter set
#[derive(Clone, Default, Serialize)]
pub struct ResolvedParameters {
    /// Parameters whose value changed, with the new value
    #[serde(skip)]
    pub updates: BTreeMap<String, String>,
    /// Parameters still holding in-scope references, with those keys
    pub unresolved: BTreeMap<String, Vec<ReferenceKey>>,
}

impl ResolvedParameters {
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// Distinct secret names that no mapping entry covered
    pub fn unresolved_names(&self) -> BTreeSet<&str> {
        self.unresolved
            .values()
            .flatten()
            .map(ReferenceKey::name)
            .collect()
    }
}

impl fmt::Debug for ResolvedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedParameters")
            .field("updates", &self.updates.keys().collect::<Vec<_>>())
            .field("unresolved", &self.unresolved)
            .finish()
    }
}

/// Resolve every value of `parameters` against `mapping`
pub fn resolve_parameters<I, K, V>(
    parameters: I,
    mapping: &SecretMapping,
    namespace: &Namespace,
) -> ResolvedParameters
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let resolver = ReferenceResolver::new(namespace, mapping);
    let mut result = ResolvedParameters::default();

    for (name, value) in parameters {
        let (name, value) = (name.as_ref(), value.as_ref());
        let references = extract(value, namespace);
        if references.is_empty() {
            continue;
        }

        let resolution = resolver.resolve(value);
        let changed = !resolution.is_unchanged();
        let final_text = resolution.into_text(value);
        let leftover = extract(&final_text, namespace);

        let resolved_names = resolved_names(&references, mapping);
        AuditLog::new("resolve", name)
            .with_resolved(resolved_names)
            .with_unresolved(distinct_names(&leftover))
            .log();

        if changed {
            result.updates.insert(name.to_string(), final_text);
        } else {
            debug!(parameter = name, "Parameter unchanged");
        }

        if !leftover.is_empty() {
            result.unresolved.insert(name.to_string(), leftover);
        }
    }

    for name in result.unresolved_names() {
        warn!(secret = name, "Secret reference not resolved");
    }

    result
}

fn resolved_names(references: &[ReferenceKey], mapping: &SecretMapping) -> Vec<String> {
    references
        .iter()
        .map(ReferenceKey::name)
        .filter(|name| mapping.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn distinct_names(keys: &[ReferenceKey]) -> Vec<String> {
    keys.iter()
        .map(ReferenceKey::name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
