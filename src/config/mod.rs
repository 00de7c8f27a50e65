//! Daemon configuration loaded from `~/.record-duplicator/config.toml`.
//!
//! The file is optional; every section falls back to its `Default`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::token::DEFAULT_LIFESPAN_SECS;
use crate::utils::app_home;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// `[server]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the daemon binds to.
    pub addr: String,
    /// Base of the generated admin URLs.
    pub admin_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8088".to_string(),
            admin_url: "http://127.0.0.1:8088/".to_string(),
        }
    }
}

/// `[token]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenConfig {
    /// Signing secret. Without one, tokens only survive until restart.
    pub secret: Option<String>,
    pub lifespan_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: None,
            lifespan_secs: DEFAULT_LIFESPAN_SECS,
        }
    }
}

/// One `[[types]]` entry: a duplicable record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TypeConfig {
    pub name: String,
    /// Capability needed to create records of this type. Absent means the
    /// type is never duplicable.
    #[serde(default)]
    pub create_capability: Option<String>,
}

/// One `[actors.<id>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActorConfig {
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicatorConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
    /// Role name to granted capabilities.
    #[serde(default)]
    pub roles: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub actors: BTreeMap<String, ActorConfig>,
}

impl DuplicatorConfig {
    /// Check what serde cannot: unique non-empty type names, a usable token
    /// lifespan and a parseable admin URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for ty in &self.types {
            if ty.name.trim().is_empty() {
                return Err(ConfigError::Invalid("type name must not be empty".to_string()));
            }
            if !seen.insert(ty.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "type '{}' is declared more than once",
                    ty.name
                )));
            }
        }
        if self.token.lifespan_secs < 2 {
            return Err(ConfigError::Invalid(format!(
                "token.lifespan_secs must be at least 2, got {}",
                self.token.lifespan_secs
            )));
        }
        url::Url::parse(&self.server.admin_url).map_err(|e| {
            ConfigError::Invalid(format!("server.admin_url '{}': {e}", self.server.admin_url))
        })?;
        Ok(())
    }
}

/// Default config file location.
#[must_use]
pub fn default_config_path() -> PathBuf {
    app_home().join("config.toml")
}

/// Load and validate the config at `path`.
///
/// A missing file yields `DuplicatorConfig::default()`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config(path: &Path) -> Result<DuplicatorConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(DuplicatorConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: DuplicatorConfig = toml::from_str(&content)?;
    config.validate()?;
    debug!(
        types = config.types.len(),
        actors = config.actors.len(),
        "Loaded config from {}",
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
