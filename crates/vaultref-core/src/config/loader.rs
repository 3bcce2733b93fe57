//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::{non_empty, Namespace, VaultRefConfigFile};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::debug;

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["vaultref.yaml", "vaultref.yml"];

/// Environment variable overriding the configured namespace prefix
pub const NAMESPACE_ENV_VAR: &str = "VAULTREF_NAMESPACE";

/// Loaded vaultref configuration
#[derive(Debug, Clone)]
pub struct VaultRefConfig {
    /// The parsed configuration
    pub config: VaultRefConfigFile,

    /// Path to the configuration file, if one was found
    pub config_path: Option<Utf8PathBuf>,
}

impl VaultRefConfig {
    /// Load configuration from the specified path or search for it.
    ///
    /// An explicit path must exist. When searching, a missing file yields
    /// the defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let found = match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| Error::from_io(p.as_str(), e))?;
                Some((p.to_owned(), content))
            }
            None => Self::find_config()?,
        };

        let mut loaded = match found {
            Some((config_path, content)) => {
                debug!("Loading configuration from {}", config_path);
                Self {
                    config: Self::parse(&content)?,
                    config_path: Some(config_path),
                }
            }
            None => {
                debug!("No configuration file found, using defaults");
                Self {
                    config: VaultRefConfigFile::default(),
                    config_path: None,
                }
            }
        };

        loaded.apply_env_overrides()?;
        Ok(loaded)
    }

    /// Parse configuration YAML. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<VaultRefConfigFile> {
        if content.trim().is_empty() {
            return Ok(VaultRefConfigFile::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// The configured namespace
    pub fn namespace(&self) -> &Namespace {
        &self.config.namespace
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        let value = std::env::var(NAMESPACE_ENV_VAR).ok();
        if let Some(prefix) = non_empty(value.as_deref()) {
            debug!("Namespace overridden by {}", NAMESPACE_ENV_VAR);
            self.config.namespace = Namespace::new(prefix)?;
        }
        Ok(())
    }

    /// Find configuration file in current directory or parent directories
    fn find_config() -> Result<Option<(Utf8PathBuf, String)>> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        Self::find_config_from(&cwd)
    }

    fn find_config_from(start: &Utf8Path) -> Result<Option<(Utf8PathBuf, String)>> {
        let mut current = start;

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    let content = fs::read_to_string(&path)?;
                    return Ok(Some((path, content)));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(None)
    }
}
