//! Reference discovery across a parameter set

use crate::extractor::extract;
use crate::types::ScanReport;
use tracing::debug;
use vaultref_core::Namespace;

/// Collect every in-scope reference in `parameters` and the names of the
/// parameters that hold them.
///
/// Values without reference syntax are skipped before decomposition.
/// Malformed syntax counts as no reference.
pub fn scan<I, K, V>(parameters: I, namespace: &Namespace) -> ScanReport
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut report = ScanReport::default();

    for (name, value) in parameters {
        let refs = extract(value.as_ref(), namespace);
        if refs.is_empty() {
            continue;
        }

        debug!(
            parameter = name.as_ref(),
            references = refs.len(),
            "Found secret references"
        );
        report.keys_with_references.insert(name.as_ref().to_string());
        report.references.extend(refs);
    }

    report
}
