//! Runtime initialization and setup
//!
//! Loads configuration, opens favorites storage and wires the HTTP clients
//! into a [`Controller`].

use crate::app::{config::AppConfig, logging::init_logging};
use crate::config::{Config, ConfigLoader};
use crate::controller::{Controller, Surface};
use crate::favorites::{FavoritesStore, FileStorage, LocalStorage, MemoryStorage};
use crate::recipe::MealDbClient;
use crate::remix::ChatRemixer;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub type AppController<V> = Controller<MealDbClient, ChatRemixer, Arc<dyn LocalStorage>, V>;

/// Initialize logging and load the layered configuration
pub async fn initialize_app(app: &AppConfig) -> Result<Config> {
    init_logging(app);

    let config = ConfigLoader::new(app.config_path.clone())
        .load()
        .await
        .context("Failed to load configuration")?;

    if config.remix.api_key.is_none() {
        debug!("No remix API key configured; remixing is disabled");
    }
    Ok(config)
}

/// Storage selected by the command line, then the config file, then the platform default
pub fn open_storage(config: &Config, app: &AppConfig) -> Result<Arc<dyn LocalStorage>> {
    if app.ephemeral {
        info!("Using in-memory favorites storage");
        return Ok(Arc::new(MemoryStorage::default()));
    }

    let path = match &app.storage_path {
        Some(path) => path.clone(),
        None => config.storage_path()?,
    };
    info!("Using favorites storage at {:?}", path);
    Ok(Arc::new(FileStorage::new(path)))
}

pub fn build_controller<V: Surface>(
    config: &Config,
    app: &AppConfig,
    surface: V,
) -> Result<AppController<V>> {
    let recipes = MealDbClient::new(&config.recipes.base_url, config.recipes.timeout_secs)
        .context("Failed to create recipe client")?;
    let remixer =
        ChatRemixer::new(config.chat_settings()).context("Failed to create remix client")?;
    let favorites = FavoritesStore::new(open_storage(config, app)?);

    Ok(Controller::new(recipes, remixer, favorites, surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MemorySurface;
    use crate::favorites::FAVORITES_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_cli_storage_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = temp_dir.path().join("cli.json");
        let mut config = Config::new();
        config.storage.path = Some(temp_dir.path().join("file.json"));

        let app = AppConfig::new(0).with_storage_path(Some(cli_path.clone()));
        let storage = open_storage(&config, &app).unwrap();
        storage.set_item(FAVORITES_KEY, "[]").unwrap();

        assert!(cli_path.exists());
        assert!(!temp_dir.path().join("file.json").exists());
    }

    #[test]
    fn test_ephemeral_storage_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.storage.path = Some(temp_dir.path().join("file.json"));

        let app = AppConfig::new(0).with_ephemeral(true);
        let storage = open_storage(&config, &app).unwrap();
        storage.set_item(FAVORITES_KEY, "[\"Laksa\"]").unwrap();

        assert!(!temp_dir.path().join("file.json").exists());
        assert_eq!(storage.get_item(FAVORITES_KEY).as_deref(), Some("[\"Laksa\"]"));
    }

    #[test]
    fn test_build_controller_starts_idle() {
        let app = AppConfig::new(0).with_ephemeral(true);
        let controller = build_controller(&Config::new(), &app, MemorySurface::new()).unwrap();
        assert!(controller.current_recipe().is_none());
        assert!(controller.saved_names().is_empty());
    }
}
