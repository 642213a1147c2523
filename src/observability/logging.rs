//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Pick the output format from settings and operating mode
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only status lines
//! - Colors only when stderr is a terminal
//! - JSON format for production, human format otherwise (unless overridden)
//! - `RUST_LOG` wins over the configured level

use std::io::{self, IsTerminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::env::OperatingMode;
use crate::config::schema::{LogFormat, ObservabilityConfig};

/// Resolve `Auto` against the operating mode.
pub fn effective_format(format: LogFormat, mode: &OperatingMode) -> LogFormat {
    match format {
        LogFormat::Auto if mode.is_production() => LogFormat::Json,
        LogFormat::Auto => LogFormat::Pretty,
        explicit => explicit,
    }
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init_logging(config: &ObservabilityConfig, mode: &OperatingMode) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.trim()));

    let fmt_layer = match effective_format(config.log_format, mode) {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_mode() {
        assert_eq!(
            effective_format(LogFormat::Auto, &OperatingMode::Production),
            LogFormat::Json
        );
        assert_eq!(
            effective_format(LogFormat::Auto, &OperatingMode::Development),
            LogFormat::Pretty
        );
        assert_eq!(
            effective_format(LogFormat::Auto, &OperatingMode::Other("staging".into())),
            LogFormat::Pretty
        );
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            effective_format(LogFormat::Pretty, &OperatingMode::Production),
            LogFormat::Pretty
        );
        assert_eq!(
            effective_format(LogFormat::Json, &OperatingMode::Development),
            LogFormat::Json
        );
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = ObservabilityConfig::default();
        let _ = init_logging(&config, &OperatingMode::Development);
        assert!(!init_logging(&config, &OperatingMode::Development));
    }
}
