//! Startup context resolved from the process environment.
//!
//! The context is a snapshot: it is built once at launch and never changes.
//! Lookups are total. A key that is absent, or present but empty, resolves
//! to the caller's default.

use std::collections::BTreeMap;
use std::fmt;

/// Environment key holding the operating mode.
pub const MODE_KEY: &str = "NODE_ENV";

/// Mode reported when [`MODE_KEY`] is unset or empty.
pub const DEFAULT_MODE: &str = "development";

/// Read-only key/value snapshot of the launch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupContext {
    vars: BTreeMap<String, String>,
}

impl StartupContext {
    /// Build a context from key/value pairs. Later pairs win over earlier ones.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the current process environment.
    ///
    /// Entries whose key or value is not valid Unicode are skipped.
    pub fn from_process_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Raw lookup. Empty values are returned as-is.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Resolve `key`, falling back to `default` when absent or empty.
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// The operating mode exactly as configured, or [`DEFAULT_MODE`].
    pub fn mode(&self) -> &str {
        self.resolve(MODE_KEY, DEFAULT_MODE)
    }

    /// The operating mode classified.
    pub fn operating_mode(&self) -> OperatingMode {
        OperatingMode::from(self.mode())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Deployment environment the process runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingMode {
    Development,
    Production,
    /// Any other value, kept verbatim (e.g. "staging", "test").
    Other(String),
}

impl OperatingMode {
    pub fn is_production(&self) -> bool {
        matches!(self, OperatingMode::Production)
    }
}

impl From<&str> for OperatingMode {
    fn from(value: &str) -> Self {
        match value {
            "development" => OperatingMode::Development,
            "production" => OperatingMode::Production,
            other => OperatingMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingMode::Development => f.write_str("development"),
            OperatingMode::Production => f.write_str("production"),
            OperatingMode::Other(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_when_unset() {
        let ctx = StartupContext::default();
        assert_eq!(ctx.mode(), "development");
        assert_eq!(ctx.operating_mode(), OperatingMode::Development);
    }

    #[test]
    fn test_mode_defaults_when_empty() {
        let ctx = StartupContext::from_vars([(MODE_KEY, "")]);
        assert_eq!(ctx.get(MODE_KEY), Some(""));
        assert_eq!(ctx.mode(), DEFAULT_MODE);
    }

    #[test]
    fn test_mode_is_verbatim() {
        for value in ["production", "staging", "Production", " qa "] {
            let ctx = StartupContext::from_vars([(MODE_KEY, value)]);
            assert_eq!(ctx.mode(), value);
            assert_eq!(ctx.operating_mode().to_string(), value);
        }
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let ctx = StartupContext::from_vars([("node_env", "production")]);
        assert_eq!(ctx.mode(), "development");
    }

    #[test]
    fn test_classification() {
        assert!(OperatingMode::from("production").is_production());
        assert!(!OperatingMode::from("prod").is_production());
        assert_eq!(
            OperatingMode::from("test"),
            OperatingMode::Other("test".to_string())
        );
    }
}
