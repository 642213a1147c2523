//! Settings validation.
//!
//! Serde handles syntax; this module checks values. All errors are
//! collected rather than stopping at the first one.

use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate settings, returning every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.trim();
    if level.is_empty() {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: "must not be empty".to_string(),
        });
    } else if let Err(e) = EnvFilter::try_new(level) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!("invalid filter directive {:?}: {}", level, e),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
