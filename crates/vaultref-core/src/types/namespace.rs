//! Secret namespace prefix

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used when none is configured
pub const DEFAULT_NAMESPACE_PREFIX: &str = "vault:";

/// The prefix that marks a reference key as addressing the secret store.
///
/// A key is in scope when it starts with the prefix. The bare prefix is in
/// scope too and addresses the empty secret name.
/// Scope is always decided on a decomposed key, never on raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    /// Create a namespace, rejecting prefixes that can never match a key
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(Error::invalid_namespace(prefix, "prefix must not be empty"));
        }
        if prefix.contains('%') {
            return Err(Error::invalid_namespace(
                prefix,
                "prefix must not contain the '%' delimiter",
            ));
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(Error::invalid_namespace(
                prefix,
                "prefix must not contain whitespace",
            ));
        }

        Ok(Self { prefix })
    }

    /// The raw prefix string
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Strip the prefix from `key`, returning the secret name when in scope
    pub fn strip<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.prefix.as_str())
    }

    /// Fast raw-text reject: false only when `text` cannot hold an in-scope key
    pub fn may_appear_in(&self, text: &str) -> bool {
        text.contains(self.prefix.as_str())
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
        }
    }
}

impl TryFrom<String> for Namespace {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.prefix
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}
