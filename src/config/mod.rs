//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (immutable)
//!
//! env file (.env, optional)
//!     → env_file.rs (parse, fill unset process variables, never fatal)
//!     → process environment
//!     → env.rs (StartupContext snapshot)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All settings have defaults to allow running with no files at all
//! - A bad settings file fails startup; a bad env file does not

pub mod env;
pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{OperatingMode, StartupContext};
pub use loader::ConfigError;
pub use schema::AppConfig;
pub use schema::LifecycleConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
