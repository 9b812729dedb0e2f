//! String-keyed persistent slots

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Local persistent key-value storage
///
/// Mirrors the browser `localStorage` contract: every slot holds a string and
/// a missing slot reads as `None`.
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for std::sync::Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Slots kept in a single JSON object file
///
/// Writes go to a sibling temp file and are renamed over the target. Reads
/// tolerate a missing or corrupted file by treating it as empty storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write of the whole file within this process
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_slots(&self) -> Map<String, Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Storage file {:?} does not exist yet", self.path);
                return Map::new();
            }
            Err(e) => {
                warn!("Cannot read storage file {:?}: {}", self.path, e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(slots) => slots,
            Err(e) => {
                warn!("Storage file {:?} is corrupted, ignoring: {}", self.path, e);
                Map::new()
            }
        }
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().ok()?;
        match self.read_slots().remove(key)? {
            Value::String(value) => Some(value),
            other => {
                warn!("Storage slot '{}' is not a string: {}", key, other);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut slots = self.read_slots();
        slots.insert(key.to_string(), Value::String(value.to_string()));
        let json = serde_json::to_string_pretty(&slots)?;

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_file = PathBuf::from(temp_name);

        fs::write(&temp_file, json).map_err(|source| StorageError::Write {
            path: temp_file.clone(),
            source,
        })?;
        fs::rename(&temp_file, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Wrote storage slot '{}' to {:?}", key, self.path);
        Ok(())
    }
}

/// Slots held in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
