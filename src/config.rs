use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{ImportError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub input_path: PathBuf,
    pub export_path: PathBuf,
    /// Worksheet to read; the first sheet when unset
    pub sheet: Option<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            export_path: PathBuf::from(constants::DEFAULT_EXPORT_PATH),
            sheet: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub site_url: Option<String>,
    pub create_path: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            create_path: constants::DEFAULT_CREATE_PATH.to_string(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ApiConfig {
    /// Full URL of the vendor creation endpoint.
    pub fn create_vendor_url(&self) -> Result<String> {
        let site_url = self
            .site_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ImportError::Config("api.site_url is required for live imports".to_string()))?;

        let path = self.create_path.trim();
        let path = if path.starts_with('/') { path.to_string() } else { format!("/{}", path) };
        Ok(format!("{}{}", site_url.trim_end_matches('/'), path))
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        Self::from_toml_str(&config_content)
    }

    /// Loads `path` when it exists, otherwise falls back to built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(input) = non_empty(constants::ENV_INPUT_PATH) {
            self.import.input_path = PathBuf::from(input);
        }
        if let Some(export) = non_empty(constants::ENV_EXPORT_PATH) {
            self.import.export_path = PathBuf::from(export);
        }
        if let Some(site_url) = non_empty(constants::ENV_SITE_URL) {
            self.api.site_url = Some(site_url);
        }
    }
}
