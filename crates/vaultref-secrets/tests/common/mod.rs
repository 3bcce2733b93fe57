//! Shared helpers for vaultref-secrets integration tests

#![allow(dead_code)]

use vaultref_secrets::{Namespace, ParameterSet, SecretMapping};

/// Namespace prefix used by the scenario tables
pub const SCENARIO_PREFIX: &str = "prefix.";

pub fn scenario_namespace() -> Namespace {
    Namespace::new(SCENARIO_PREFIX).expect("scenario prefix is valid")
}

pub fn params(pairs: &[(&str, &str)]) -> ParameterSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn mapping(pairs: &[(&str, &str)]) -> SecretMapping {
    pairs.iter().copied().collect()
}
