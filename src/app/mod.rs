//! Application module
//!
//! This module contains application-level functionality including:
//! - Command-line derived configuration
//! - Logging setup
//! - Runtime initialization and controller wiring

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

// Re-export main application functions
pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::{build_controller, initialize_app, AppController};
