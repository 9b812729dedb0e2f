use crate::error::{Error, Result};
use crate::recipe::DEFAULT_BASE_URL;
use crate::remix::client::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::remix::ChatSettings;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

pub const CONFIG_FILE: &str = "config.toml";
pub const STORAGE_FILE: &str = "storage.json";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "recipe-remix", "recipe-remix")
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Default location of `config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Default location of the favorites storage file
pub fn default_storage_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join(STORAGE_FILE))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub recipes: RecipesConfig,
    pub remix: RemixConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecipesConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RemixConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for RemixConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 60,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment
    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`.
    ///
    /// `RECIPE_REMIX_API_KEY` wins over `OPENAI_API_KEY`; both win over the file.
    pub fn merge_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = non_empty("RECIPE_REMIX_API_KEY").or_else(|| non_empty("OPENAI_API_KEY")) {
            self.remix.api_key = Some(api_key);
        }

        if let Some(model) = non_empty("RECIPE_REMIX_MODEL") {
            self.remix.model = model;
        }

        if let Some(base_url) = non_empty("RECIPE_REMIX_BASE_URL") {
            self.recipes.base_url = base_url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.recipes.base_url)
            .map_err(|e| Error::Config(format!("Invalid recipes.base_url: {}", e)))?;
        url::Url::parse(&self.remix.endpoint)
            .map_err(|e| Error::Config(format!("Invalid remix.endpoint: {}", e)))?;

        if !(0.0..=2.0).contains(&self.remix.temperature) {
            return Err(Error::Config(format!(
                "remix.temperature must be between 0.0 and 2.0, got {}",
                self.remix.temperature
            )));
        }
        if self.remix.max_tokens == 0 {
            return Err(Error::Config(
                "remix.max_tokens must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            endpoint: self.remix.endpoint.clone(),
            api_key: self.remix.api_key.clone(),
            model: self.remix.model.clone(),
            max_tokens: self.remix.max_tokens,
            temperature: self.remix.temperature,
            timeout_secs: self.remix.timeout_secs,
        }
    }

    /// Configured storage file, falling back to the platform data directory
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => default_storage_path(),
        }
    }
}
