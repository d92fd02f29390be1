//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "ROCKET_API_URL";
/// Environment variable overriding `storage.dir`.
pub const ENV_STORAGE_DIR: &str = "ROCKET_STORAGE_DIR";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront services.
    #[serde(default)]
    pub api: ApiConfig,

    /// Cart persistence.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(dir) = lookup(ENV_STORAGE_DIR).filter(|v| !v.is_empty()) {
            self.storage.dir = dir;
        }
        self
    }
}

/// Stock and products service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving `/stock/{id}` and `/products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout. Requests wait indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for stored values, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".rocket".to_string()
}

fn default_storage_key() -> String {
    "@RocketShoes:cart".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Generate a default rocket.toml config file.
pub fn generate_default_config() -> String {
    r#"# RocketShoes cart configuration

[api]
base_url = "http://localhost:3333"
# timeout_secs = 10

[storage]
dir = ".rocket"
key = "@RocketShoes:cart"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.api.timeout(), None);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [api]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.storage.key, "@RocketShoes:cart");
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default().with_env_overrides(|name| match name {
            ENV_API_URL => Some("http://shop.internal:8080".to_string()),
            ENV_STORAGE_DIR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://shop.internal:8080");
        assert_eq!(config.storage.dir, ".rocket");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocket.json");
        std::fs::write(
            &path,
            r#"{ "api": { "base_url": "http://shop.internal", "timeout_secs": 3 } }"#,
        )
        .unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "http://shop.internal");
        assert_eq!(config.api.timeout_secs, Some(3));
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocket.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();

        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
