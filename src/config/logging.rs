//! Log subscriber setup
//!
//! Logs go to `dealdesk.log` in the base directory rather than stderr, since
//! stderr shares the screen with the TUI.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use super::paths::DealDeskPaths;
use super::settings::{LogFormat, Settings};
use crate::error::DealDeskError;

/// Resolve the effective log format. `DEALDESK_LOG_FORMAT` wins over settings.
pub fn resolve_format(settings: &Settings) -> LogFormat {
    match std::env::var("DEALDESK_LOG_FORMAT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        Ok(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
        _ => settings.log_format,
    }
}

/// Install the global tracing subscriber
///
/// The filter is read from `DEALDESK_LOG` (same syntax as `RUST_LOG`) and
/// defaults to `info`.
pub fn init_tracing(paths: &DealDeskPaths, settings: &Settings) -> Result<(), DealDeskError> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| DealDeskError::Io(format!("Failed to open log file: {}", e)))?;
    let writer = Mutex::new(file);

    let filter = EnvFilter::try_from_env("DEALDESK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match resolve_format(settings) {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| DealDeskError::Config(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_format_used_without_override() {
        std::env::remove_var("DEALDESK_LOG_FORMAT");
        let mut settings = Settings::default();
        settings.log_format = LogFormat::Json;
        assert_eq!(resolve_format(&settings), LogFormat::Json);
    }
}
