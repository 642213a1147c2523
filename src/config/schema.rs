//! Runner settings schema.
//!
//! Settings are optional: every field has a default so the service starts
//! without a settings file. All types derive Serde traits for
//! deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root settings for the bootstrap service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Process lifecycle settings.
    pub lifecycle: LifecycleConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g. "info", "chief_of_staff=debug").
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Auto,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON in production mode, human-readable otherwise.
    #[default]
    Auto,
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Keep the process alive after it reports ready, until SIGINT/SIGTERM.
    pub hold: bool,
}
