//! Saved recipe names backed by local key-value storage
//!
//! Favorites live in a single storage slot as a JSON array of recipe names.
//! The slot is the only source of truth: every operation reloads it before
//! acting, so no in-memory copy is trusted across calls.
//!
//! # Architecture
//!
//! - [`LocalStorage`] - string-keyed slots, the contract of browser local storage
//! - [`FileStorage`] - a JSON file holding every slot, written atomically
//! - [`MemoryStorage`] - in-process slots for tests and ephemeral sessions
//! - [`FavoritesStore`] - load / add-if-absent / remove over one slot
//!
//! # Examples
//!
//! ```rust
//! use recipe_remix::favorites::{FavoritesStore, MemoryStorage};
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = FavoritesStore::new(MemoryStorage::default());
//! store.add("Teriyaki Chicken Casserole")?;
//! store.add("Teriyaki Chicken Casserole")?;
//! assert_eq!(store.load(), vec!["Teriyaki Chicken Casserole".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod storage;
pub mod store;

pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};
pub use store::{FavoritesStore, FAVORITES_KEY};
