//! # recipe-remix
//!
//! A terminal recipe viewer: fetch a random recipe from TheMealDB, keep a list
//! of favorites in local storage, and ask a chat-completion API for a themed
//! remix of whatever is on display.
//!
//! ## Usage
//!
//! ```bash
//! recipe-remix                        # interactive session
//! recipe-remix random --save
//! recipe-remix show "Teriyaki Chicken Casserole" --remix "campfire"
//! recipe-remix saved list
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging, startup configuration and controller wiring
//! - `cli` - Argument parsing, interactive session and one-shot commands
//! - `config` - TOML configuration with environment overrides
//! - `controller` - View state machine and region rendering
//! - `favorites` - Saved recipe names over local key-value storage
//! - `recipe` - Recipe provider client and meal normalization
//! - `remix` - Generative remix prompt and chat-completion client
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod favorites;
pub mod recipe;
pub mod remix;
