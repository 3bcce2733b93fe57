//! Reference substitution for a single value

use crate::grammar;
use crate::types::{Resolution, SecretMapping};
use vaultref_core::Namespace;

/// Substitute every in-scope, mapped reference in `value` with its secret.
///
/// Out-of-scope and unmapped references keep their original `%key%` bytes.
/// Substituted values are inserted verbatim and never rescanned. Returns
/// [`Resolution::Unchanged`] when the output equals `value`.
pub fn resolve(value: &str, mapping: &SecretMapping, namespace: &Namespace) -> Resolution {
    if !grammar::may_contain_reference(value) {
        return Resolution::Unchanged;
    }

    let resolved = grammar::decompose(value, |key| {
        namespace.strip(key).and_then(|name| mapping.get(name))
    });

    if resolved == value {
        Resolution::Unchanged
    } else {
        Resolution::Resolved(resolved)
    }
}

/// A resolver bound to one namespace and mapping
#[derive(Debug, Clone)]
pub struct ReferenceResolver<'m> {
    namespace: &'m Namespace,
    mapping: &'m SecretMapping,
}

impl<'m> ReferenceResolver<'m> {
    pub fn new(namespace: &'m Namespace, mapping: &'m SecretMapping) -> Self {
        Self { namespace, mapping }
    }

    pub fn resolve(&self, value: &str) -> Resolution {
        resolve(value, self.mapping, self.namespace)
    }
}
