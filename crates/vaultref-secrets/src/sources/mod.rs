//! Loading parameter sets and secret mappings from files
//!
//! The format follows the file extension:
//! - `.json` - an object of scalar values
//! - `.yaml` / `.yml` - a mapping of scalar values
//! - anything else - `KEY=VALUE` lines

pub mod properties;

use crate::types::{ParameterSet, SecretMapping};
use std::fs;
use std::path::Path;
use tracing::debug;
use vaultref_core::{Error, Result};

/// On-disk format of a string mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Properties,
}

impl SourceFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => SourceFormat::Json,
            Some("yaml") | Some("yml") => SourceFormat::Yaml,
            _ => SourceFormat::Properties,
        }
    }
}

/// Parse `content` as a name -> value mapping
pub fn parse_mapping(content: &str, format: SourceFormat) -> Result<ParameterSet> {
    match format {
        SourceFormat::Json => {
            let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
            raw.into_iter()
                .map(|(name, value)| {
                    let value = json_scalar(&name, value)?;
                    Ok((name, value))
                })
                .collect()
        }
        SourceFormat::Yaml => {
            if content.trim().is_empty() {
                return Ok(ParameterSet::new());
            }
            let raw: std::collections::BTreeMap<String, serde_yaml_ng::Value> =
                serde_yaml_ng::from_str(content)?;
            raw.into_iter()
                .map(|(name, value)| {
                    let value = yaml_scalar(&name, value)?;
                    Ok((name, value))
                })
                .collect()
        }
        SourceFormat::Properties => Ok(properties::parse(content)),
    }
}

/// Load a parameter set from `path`
pub fn load_parameter_set(path: &Path) -> Result<ParameterSet> {
    let content = read(path)?;
    let params = parse_mapping(&content, SourceFormat::from_path(path))?;
    debug!("Loaded {} parameters from {}", params.len(), path.display());
    Ok(params)
}

/// Load a secret mapping from `path`
pub fn load_secret_mapping(path: &Path) -> Result<SecretMapping> {
    let content = read(path)?;
    let mapping: SecretMapping = parse_mapping(&content, SourceFormat::from_path(path))?
        .into_iter()
        .collect();
    debug!("Loaded {} secrets from {}", mapping.len(), path.display());
    Ok(mapping)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::from_io(path.display().to_string(), e))
}

fn json_scalar(name: &str, value: serde_json::Value) -> Result<String> {
    use serde_json::Value;
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(not_scalar(name)),
    }
}

fn yaml_scalar(name: &str, value: serde_yaml_ng::Value) -> Result<String> {
    use serde_yaml_ng::Value;
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Err(not_scalar(name)),
    }
}

fn not_scalar(name: &str) -> Error {
    Error::invalid_config(format!("value of '{}' must be a scalar", name))
}
