//! Human-readable status output.
//!
//! Status lines are the service's user-facing console output and go to
//! stdout. Diagnostics go through `tracing` to stderr instead.

pub mod reporter;

pub use reporter::StatusReporter;
