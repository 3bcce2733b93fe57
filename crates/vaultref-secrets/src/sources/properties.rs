//! `KEY=VALUE` line format

use crate::types::ParameterSet;
use tracing::debug;

/// Parse `KEY=VALUE` lines.
///
/// Blank lines and `#` comments are skipped. Keys and values are trimmed and
/// one layer of matching quotes is removed from values. Lines without `=`
/// are skipped.
pub fn parse(content: &str) -> ParameterSet {
    let mut vars = ParameterSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    debug!("Skipping line {} with empty key", idx + 1);
                    continue;
                }
                vars.insert(key.to_string(), unquote(value.trim()).to_string());
            }
            None => debug!("Skipping malformed line {}", idx + 1),
        }
    }

    vars
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
