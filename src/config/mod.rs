//! Configuration for the premium calculator
//!
//! Settings are layered with the following precedence (lowest first):
//!
//! 1. Hardcoded defaults
//! 2. Configuration file (`--config`, `./premium.toml`, or the platform config dir)
//! 3. Environment variables (`PREMIUM_*` prefix)
//! 4. Command-line flags (applied by the command handlers)
//!
//! ```toml
//! log_level = "info"
//!
//! [validation]
//! enforce_age_bounds = true
//! min_age = 0
//! max_age = 150
//!
//! [output]
//! format = "text"
//! currency_symbol = "$"
//! preview_rows = 5
//! ```

use crate::cli::validation::{AgePolicy, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
use crate::error::{CalcError, ErrorCode};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stillwater::Validation;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "premium.toml";

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Reject ages outside `min_age..=max_age`
    pub enforce_age_bounds: bool,
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            enforce_age_bounds: false,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub currency_symbol: String,
    /// Rows shown by `batch` when no `--limit` is given
    pub preview_rows: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            currency_symbol: "$".to_string(),
            preview_rows: 5,
        }
    }
}

/// Complete calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Logging level used when no `-v` flag is given
    pub log_level: String,
    pub validation: ValidationSettings,
    pub output: OutputSettings,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            validation: ValidationSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl CalcConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CalcError> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CalcError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_GENERIC
            };
            CalcError::config_with_code(
                code,
                "Failed to read configuration file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            CalcError::Config {
                code,
                message,
                source,
                ..
            } => CalcError::Config {
                code,
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Age policy derived from the validation settings
    pub fn age_policy(&self) -> AgePolicy {
        AgePolicy {
            enforce: self.validation.enforce_age_bounds,
            min: self.validation.min_age,
            max: self.validation.max_age,
        }
    }

    /// Apply `PREMIUM_*` environment variables from the process environment
    pub fn merge_env_vars(&mut self) -> Result<(), CalcError> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `PREMIUM_*` overrides using the given variable lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<(), CalcError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PREMIUM_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(value) = lookup("PREMIUM_ENFORCE_AGE_BOUNDS") {
            self.validation.enforce_age_bounds = parse_env("PREMIUM_ENFORCE_AGE_BOUNDS", &value)?;
        }
        if let Some(value) = lookup("PREMIUM_MIN_AGE") {
            self.validation.min_age = parse_env("PREMIUM_MIN_AGE", &value)?;
        }
        if let Some(value) = lookup("PREMIUM_MAX_AGE") {
            self.validation.max_age = parse_env("PREMIUM_MAX_AGE", &value)?;
        }
        if let Some(value) = lookup("PREMIUM_OUTPUT_FORMAT") {
            self.output.format = parse_env("PREMIUM_OUTPUT_FORMAT", &value)?;
        }
        if let Some(symbol) = lookup("PREMIUM_CURRENCY_SYMBOL") {
            self.output.currency_symbol = symbol;
        }
        if let Some(value) = lookup("PREMIUM_PREVIEW_ROWS") {
            self.output.preview_rows = parse_env("PREMIUM_PREVIEW_ROWS", &value)?;
        }
        Ok(())
    }

    /// Check every setting, reporting all problems together
    pub fn validate(&self) -> Result<(), CalcError> {
        self.validate_internal().into_result().map_err(|errors| {
            CalcError::config_with_code(
                ErrorCode::CONFIG_VALIDATION_FAILED,
                format!(
                    "Configuration validation failed:\n{}",
                    errors
                        .iter()
                        .map(|e| format!("  - {}", e))
                        .collect::<Vec<_>>()
                        .join("\n")
                ),
                None,
            )
        })
    }

    fn validate_internal(&self) -> Validation<(), Vec<String>> {
        let checks = [
            validate_log_level_internal(&self.log_level),
            validate_age_bounds_internal(&self.validation),
            validate_output_internal(&self.output),
        ];

        let errors: Vec<String> = checks
            .into_iter()
            .filter_map(|check| match check {
                Validation::Success(()) => None,
                Validation::Failure(errors) => Some(errors),
            })
            .flatten()
            .collect();

        if errors.is_empty() {
            Validation::success(())
        } else {
            Validation::failure(errors)
        }
    }
}

fn validate_log_level_internal(level: &str) -> Validation<(), Vec<String>> {
    if VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Validation::success(())
    } else {
        Validation::failure(vec![format!(
            "log_level '{}' must be one of: {}",
            level,
            VALID_LOG_LEVELS.join(", ")
        )])
    }
}

fn validate_age_bounds_internal(settings: &ValidationSettings) -> Validation<(), Vec<String>> {
    if settings.min_age > settings.max_age {
        Validation::failure(vec![format!(
            "min_age ({}) must not exceed max_age ({})",
            settings.min_age, settings.max_age
        )])
    } else {
        Validation::success(())
    }
}

fn validate_output_internal(settings: &OutputSettings) -> Validation<(), Vec<String>> {
    let mut errors = Vec::new();

    if settings.preview_rows == 0 {
        errors.push("preview_rows must be greater than 0".to_string());
    }
    if settings.currency_symbol.is_empty() {
        errors.push("currency_symbol must not be empty".to_string());
    }

    if errors.is_empty() {
        Validation::success(())
    } else {
        Validation::failure(errors)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CalcError> {
    value.trim().parse().map_err(|_| {
        CalcError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid value '{}' for {}", value, key),
            None,
        )
    })
}

/// Platform configuration file, e.g. `~/.config/premium/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "premium", "premium").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Pick the configuration file to read, if any
pub fn resolve_config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = working_dir.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    global_config_path().filter(|p| p.is_file())
}

/// Load configuration from file and environment, then validate it
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<CalcConfig, CalcError> {
    let mut config = match resolve_config_path(explicit, working_dir) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            CalcConfig::from_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            CalcConfig::default()
        }
    };

    config.merge_env_vars()?;
    config.validate()?;
    Ok(config)
}
