//! Application configuration
//!
//! Process-level settings derived from the command line before any
//! calculator configuration is read.

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Log level from the calculator configuration, used when not verbose
    pub configured_level: Option<String>,
    /// Working directory used to find `premium.toml`
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            verbose,
            configured_level: None,
            working_dir,
        }
    }

    /// Use a configured log level when no `-v` flag was given
    pub fn with_configured_level(mut self, level: impl Into<String>) -> Self {
        self.configured_level = Some(level.into());
        self
    }

    /// Get the log filter string based on verbosity
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .configured_level
                .as_deref()
                .unwrap_or("info")
                .to_lowercase(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            configured_level: None,
            working_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(AppConfig::default().log_level(), "info");
        assert_eq!(AppConfig { verbose: 1, ..Default::default() }.log_level(), "debug");
        assert_eq!(AppConfig { verbose: 2, ..Default::default() }.log_level(), "trace");
        assert_eq!(AppConfig { verbose: 5, ..Default::default() }.log_level(), "trace");
    }

    #[test]
    fn test_configured_level_only_applies_without_verbose() {
        let config = AppConfig::default().with_configured_level("WARN");
        assert_eq!(config.log_level(), "warn");

        let config = AppConfig {
            verbose: 1,
            ..AppConfig::default().with_configured_level("warn")
        };
        assert_eq!(config.log_level(), "debug");
    }
}
