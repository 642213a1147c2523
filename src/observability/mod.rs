//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Consumers:
//!     → stderr (human format or JSON lines)
//! ```

pub mod logging;
