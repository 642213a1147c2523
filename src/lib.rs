//! Digital Chief of Staff service library.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod output;

pub use config::{AppConfig, StartupContext};
pub use lifecycle::shutdown::Shutdown;
pub use lifecycle::startup::{bootstrap, BootOptions, BootstrapRunner, StartupError};
pub use lifecycle::supervisor::supervise;
pub use lifecycle::BootState;
