//! Core types for reference resolution

use crate::security::SecureString;
use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use vaultref_core::Namespace;

/// Parameter name -> value, read-only to the resolution engine
pub type ParameterSet = std::collections::BTreeMap<String, String>;

/// An in-scope reference key.
///
/// Keeps the full key as written between the delimiters together with the
/// secret name left after stripping the namespace prefix. Equality and
/// ordering follow the full key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceKey {
    key: String,
    name_offset: usize,
}

impl ReferenceKey {
    /// Build a key when `key` is in scope of `namespace`
    pub fn parse(key: &str, namespace: &Namespace) -> Option<Self> {
        let name = namespace.strip(key)?;
        Some(Self {
            key: key.to_string(),
            name_offset: key.len() - name.len(),
        })
    }

    /// The full key, prefix included
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The secret name used for lookup
    pub fn name(&self) -> &str {
        &self.key[self.name_offset..]
    }

    /// The key in reference syntax, as it appears in text
    pub fn to_reference(&self) -> String {
        format!("%{}%", self.key)
    }
}

impl Serialize for ReferenceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key)
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Result of resolving one value
#[derive(Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The output equals the input; nothing needs writing back
    Unchanged,
    /// The value with references substituted
    Resolved(String),
}

impl Resolution {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Resolution::Unchanged)
    }

    /// The resolved text, if anything changed
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Resolution::Unchanged => None,
            Resolution::Resolved(s) => Some(s),
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Resolution::Unchanged => None,
            Resolution::Resolved(s) => Some(s),
        }
    }

    /// The final text, falling back to `original` when unchanged
    pub fn into_text(self, original: &str) -> String {
        self.into_option().unwrap_or_else(|| original.to_string())
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Unchanged => write!(f, "Unchanged"),
            Resolution::Resolved(s) => write!(f, "Resolved([REDACTED {} bytes])", s.len()),
        }
    }
}

/// References discovered across a parameter set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Distinct in-scope reference keys
    pub references: BTreeSet<ReferenceKey>,
    /// Names of parameters holding at least one in-scope reference
    pub keys_with_references: BTreeSet<String>,
}

impl ScanReport {
    /// Distinct secret names to fetch
    pub fn secret_names(&self) -> BTreeSet<&str> {
        self.references.iter().map(ReferenceKey::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Secret name -> secret value, assembled out of band
#[derive(Debug, Clone, Default)]
pub struct SecretMapping {
    secrets: HashMap<String, SecureString>,
}

impl SecretMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SecureString>) {
        self.secrets.insert(name.into(), value.into());
    }

    /// Secret value for a stripped name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.secrets.get(name).map(SecureString::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.secrets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl<K: Into<String>, V: Into<SecureString>> FromIterator<(K, V)> for SecretMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = SecretMapping::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}
