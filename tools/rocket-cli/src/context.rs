//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use rocket_cache::FileStore;
use rocket_cart::{CartStorage, CartStore, HttpCatalog, RecordingNotifier};
use rocket_data::FetchClient;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["rocket.toml", ".rocket.toml", "rocket.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with environment overrides applied.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        let config = config.with_env_overrides(|name| std::env::var(name).ok());

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Build the cart store described by the config.
    ///
    /// Toasts are queued on the returned notifier so they can be printed
    /// once any spinner has been cleared.
    pub fn open_store(&self) -> Result<(CartStore, Arc<RecordingNotifier>)> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let files = FileStore::open(dir.clone())
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        let storage = CartStorage::new(files).with_key(self.config.storage.key.clone());

        let mut client = FetchClient::new().with_base_url(self.config.api.base_url.clone());
        if let Some(timeout) = self.config.api.timeout() {
            client = client
                .with_timeout(timeout)
                .context("Failed to build HTTP client")?;
        }

        debug!(
            storage = %dir.display(),
            base_url = %self.config.api.base_url,
            "opening cart store"
        );
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CartStore::new(storage, HttpCatalog::new(client), Arc::clone(&notifier));
        Ok((store, notifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("rocket.toml"),
            "[api]\nbase_url = \"http://example.test\"\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.api.base_url, "http://example.test");
        assert_eq!(path, root.path().join("rocket.toml"));
    }
}
