//! Application configuration
//!
//! Process-level settings that come from the command line rather than the
//! config file.

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Explicit config file, overriding the platform default
    pub config_path: Option<PathBuf>,
    /// Explicit favorites storage file
    pub storage_path: Option<PathBuf>,
    /// Keep favorites in memory only
    pub ephemeral: bool,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_storage_path(mut self, path: Option<PathBuf>) -> Self {
        self.storage_path = path;
        self
    }

    pub fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Get the log filter string based on verbosity
    ///
    /// The default stays at `warn` so log lines do not interleave with the
    /// recipe display on stdout.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_by_verbosity() {
        assert_eq!(AppConfig::new(0).log_level(), "warn");
        assert_eq!(AppConfig::new(1).log_level(), "debug");
        assert_eq!(AppConfig::new(2).log_level(), "trace");
        assert_eq!(
            AppConfig::new(7).log_level(),
            "trace,hyper=debug,reqwest=debug"
        );
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::new(1)
            .with_storage_path(Some(PathBuf::from("/tmp/s.json")))
            .with_ephemeral(true);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/s.json")));
        assert!(config.ephemeral);
        assert!(config.config_path.is_none());
    }
}
