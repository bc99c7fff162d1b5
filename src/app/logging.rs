//! Logging configuration and initialization
//!
//! The subscriber is installed before configuration is read, so the
//! configuration loader's own messages are visible under `-v`. The filter
//! sits behind a reload layer and is swapped once the configured
//! `log_level` is known.

use crate::app::config::AppConfig;
use tracing::{debug, trace, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Handle for replacing the active log filter after startup
pub type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

/// Initialize tracing/logging for the application.
///
/// Logs go to stderr so quotes on stdout stay machine readable.
pub fn init_logging(config: &AppConfig) -> LogFilterHandle {
    let (filter, handle) = reload::Layer::new(EnvFilter::new(config.log_level()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(config.verbose >= 3); // Show line numbers for -vvv

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    debug!("premium started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    handle
}

/// Switch the filter to the level derived from `config`.
///
/// `-v` flags still win over the configured `log_level`.
pub fn apply_log_level(handle: &LogFilterHandle, config: &AppConfig) {
    let level = config.log_level();
    let unchanged = handle
        .with_current(|current| current.to_string() == level)
        .unwrap_or(false);
    if unchanged {
        return;
    }

    match handle.reload(EnvFilter::new(&level)) {
        Ok(()) => debug!("Log level set to {}", level),
        Err(e) => warn!("Failed to apply log level {}: {}", level, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_filter(handle: &LogFilterHandle) -> String {
        handle.with_current(|f| f.to_string()).unwrap()
    }

    #[test]
    fn test_apply_log_level_uses_configured_level() {
        let (_layer, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new("info"));

        apply_log_level(&handle, &AppConfig::default().with_configured_level("warn"));
        assert_eq!(current_filter(&handle), "warn");
    }

    #[test]
    fn test_apply_log_level_keeps_verbose_override() {
        let (_layer, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new("debug"));

        let config = AppConfig {
            verbose: 1,
            ..AppConfig::default().with_configured_level("error")
        };
        apply_log_level(&handle, &config);
        assert_eq!(current_filter(&handle), "debug");
    }
}
