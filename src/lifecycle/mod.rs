//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Load startup context → Init logging → Report status
//!
//! Supervision (supervisor.rs):
//!     Await bootstrap task → Ready (exit 0) | Failed (stderr, exit 1)
//!
//! Shutdown (shutdown.rs, signals.rs), hold mode only:
//!     SIGTERM/SIGINT → Trigger shutdown → Runner returns
//! ```
//!
//! # Design Decisions
//! - Two terminal states: Ready or Failed, no restart
//! - Status lines are emitted before any optional wait

use std::process::ExitCode;

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod supervisor;

/// Where the bootstrap is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Starting,
    Ready,
    Failed,
}

impl BootState {
    /// Process exit status for this state.
    pub fn exit_code(self) -> u8 {
        match self {
            BootState::Failed => 1,
            BootState::Starting | BootState::Ready => 0,
        }
    }
}

impl From<BootState> for ExitCode {
    fn from(state: BootState) -> Self {
        ExitCode::from(state.exit_code())
    }
}
