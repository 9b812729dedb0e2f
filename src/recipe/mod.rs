//! Recipe provider access
//!
//! [`MealDbClient`] talks to TheMealDB and normalizes its flat meal objects
//! into [`Recipe`] values. Lookups fail with a [`FetchError`] that tells a
//! transport problem apart from an empty result; rendering a message for
//! either is left to the caller.
//!
//! [`FetchError`]: crate::error::FetchError

pub mod client;
pub mod models;

pub use client::{MealDbClient, RecipeSource, DEFAULT_BASE_URL};
pub use models::{Ingredient, Recipe, INGREDIENT_SLOTS};
