//! Reference extraction from a single value

use crate::grammar;
use crate::types::ReferenceKey;
use vaultref_core::Namespace;

/// In-scope reference keys of `value`, in first-seen order with duplicates.
///
/// Out-of-scope and malformed references are skipped. Callers needing a set
/// deduplicate themselves.
pub fn extract(value: &str, namespace: &Namespace) -> Vec<ReferenceKey> {
    if !grammar::may_contain_reference(value) || !namespace.may_appear_in(value) {
        return Vec::new();
    }

    grammar::reference_keys(value)
        .filter_map(|key| ReferenceKey::parse(key, namespace))
        .collect()
}
