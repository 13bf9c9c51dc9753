use crate::client::UploadField;
use crate::error::{FreshscanError, Result};
use freshscan_common::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment override for the endpoint, checked before the stored value
pub const ENDPOINT_ENV_VAR: &str = "FRESHSCAN_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint_url: String,
    pub upload_field: UploadField,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            upload_field: UploadField::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FreshscanError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("freshscan").join("config.json"))
    }

    /// Effective endpoint: the environment variable wins over the stored value.
    pub fn endpoint(&self) -> String {
        if let Ok(url) = std::env::var(ENDPOINT_ENV_VAR) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.endpoint_url.clone()
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        self.endpoint_url = url;
        self.save()
    }

    pub fn set_field(&mut self, field: UploadField) -> Result<()> {
        self.upload_field = field;
        self.save()
    }
}
