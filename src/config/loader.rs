use std::path::{Path, PathBuf};
use tokio::fs;

use super::MaintenanceConfig;
use crate::error::{OrchestratorError, Result};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "ZMAINT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the configuration file: an explicit path wins, then the
    /// `ZMAINT_CONFIG` value, then `./config.json`.
    pub fn resolve(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        let path = explicit
            .or_else(|| {
                env_value
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::new(path)
    }

    /// Resolve against the process environment.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self::resolve(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<MaintenanceConfig> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            OrchestratorError::Config(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let config = Self::parse(&self.path, &content)?;
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Parse by extension: `.toml` as TOML, anything else as JSON.
    pub fn parse(path: &Path, content: &str) -> Result<MaintenanceConfig> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(content).map_err(|e| {
                OrchestratorError::Config(format!("invalid TOML in {}: {}", path.display(), e))
            })
        } else {
            serde_json::from_str(content).map_err(|e| {
                OrchestratorError::Config(format!("invalid JSON in {}: {}", path.display(), e))
            })
        }
    }
}
