use super::{default_config_path, Config};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolves and reads the configuration file, then layers the environment on top
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Load from `path` when given (it must exist), otherwise from the default location
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }

    pub async fn load(&self) -> Result<Config> {
        let mut config = match &self.explicit_path {
            Some(path) => Self::read(path).await?,
            None => {
                let path = default_config_path()?;
                if path.exists() {
                    Self::read(&path).await?
                } else {
                    debug!("No config file at {:?}, using defaults", path);
                    Config::new()
                }
            }
        };

        config.merge_env_vars();
        config.validate()?;
        Ok(config)
    }

    async fn read(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded config from {:?}", path);
        Config::from_toml_str(&content)
    }
}
