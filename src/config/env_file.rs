//! Optional dotenv-style file feeding the process environment.
//!
//! The file is advisory. When it is missing, unreadable or malformed the
//! service starts with no overrides from it; none of these cases are errors.
//! Loading happens before logging exists, so the outcome is returned as an
//! [`EnvFileStatus`] and logged once a subscriber is installed.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::env::StartupContext;

/// Default env file name, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// What happened when the env file was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded { path: PathBuf, entries: usize },
    Missing { path: PathBuf },
    Unreadable { path: PathBuf, error: String },
    Malformed { path: PathBuf, error: String },
}

impl EnvFileStatus {
    /// Emit the outcome through `tracing`.
    pub fn log(&self) {
        match self {
            EnvFileStatus::Loaded { path, entries } => {
                tracing::debug!(path = %path.display(), entries, "Env file loaded");
            }
            EnvFileStatus::Missing { path } => {
                tracing::debug!(path = %path.display(), "No env file, using process environment only");
            }
            EnvFileStatus::Unreadable { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "Env file unreadable, ignoring it");
            }
            EnvFileStatus::Malformed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "Env file malformed, ignoring it");
            }
        }
    }
}

/// Load `KEY=VALUE` entries from `path` into the process environment.
///
/// Variables already set are left untouched. A malformed file is discarded
/// as a whole rather than partially applied. Call this before any other
/// thread is started.
pub fn apply_env_file(path: &Path) -> EnvFileStatus {
    let path_buf = path.to_path_buf();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return EnvFileStatus::Missing { path: path_buf };
        }
        Err(e) => {
            return EnvFileStatus::Unreadable {
                path: path_buf,
                error: e.to_string(),
            };
        }
    };

    let entries = match parse_env(&bytes) {
        Ok(ctx) => ctx.len(),
        Err(e) => {
            return EnvFileStatus::Malformed {
                path: path_buf,
                error: e.to_string(),
            };
        }
    };

    match dotenvy::from_read(bytes.as_slice()) {
        Ok(()) => EnvFileStatus::Loaded {
            path: path_buf,
            entries,
        },
        Err(e) => EnvFileStatus::Malformed {
            path: path_buf,
            error: e.to_string(),
        },
    }
}

/// Parse dotenv syntax into a context without touching the environment.
pub fn parse_env(bytes: &[u8]) -> Result<StartupContext, dotenvy::Error> {
    let entries = dotenvy::from_read_iter(bytes).collect::<Result<Vec<_>, _>>()?;
    Ok(StartupContext::from_vars(entries))
}
