//! Favorites list over a single storage slot

use super::storage::{LocalStorage, StorageError};
use tracing::{debug, warn};

/// Storage slot holding the JSON array of saved recipe names
pub const FAVORITES_KEY: &str = "savedRecipes";

/// Ordered, duplicate-free list of saved recipe names
pub struct FavoritesStore<S: LocalStorage> {
    storage: S,
}

impl<S: LocalStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the saved names, treating an absent or unparseable slot as empty
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.storage.get_item(FAVORITES_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Option<Vec<String>>>(&raw) {
            Ok(names) => names.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring unparseable favorites slot: {}", e);
                Vec::new()
            }
        }
    }

    /// Append `name` unless an identical entry is already saved
    pub fn add(&self, name: &str) -> Result<(), StorageError> {
        let mut names = self.load();
        if names.iter().any(|n| n == name) {
            debug!("'{}' is already saved", name);
            return Ok(());
        }

        names.push(name.to_string());
        self.write(&names)?;
        debug!("Saved '{}' ({} favorites)", name, names.len());
        Ok(())
    }

    /// Drop every entry exactly equal to `name`
    pub fn remove(&self, name: &str) -> Result<(), StorageError> {
        let mut names = self.load();
        let before = names.len();
        names.retain(|n| n != name);
        self.write(&names)?;
        debug!("Removed {} entries named '{}'", before - names.len(), name);
        Ok(())
    }

    fn write(&self, names: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string(names)?;
        self.storage.set_item(FAVORITES_KEY, &json)
    }
}
