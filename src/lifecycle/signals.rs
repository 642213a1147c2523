//! OS signal handling.
//!
//! SIGINT and SIGTERM (Ctrl+C only on non-Unix targets) trigger the
//! shutdown coordinator. Handlers are registered before this returns, so a
//! registration failure surfaces as a startup error.

use std::io;

use crate::lifecycle::shutdown::Shutdown;

/// Register handlers and spawn a task that triggers `shutdown` on the first
/// termination signal.
#[cfg(unix)]
pub fn spawn_signal_listener(shutdown: Shutdown) -> io::Result<tokio::task::JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut interrupt = signal(SignalKind::interrupt())?;

    Ok(tokio::spawn(async move {
        tokio::select! {
            _ = terminate.recv() => tracing::info!("SIGTERM received"),
            _ = interrupt.recv() => tracing::info!("SIGINT received"),
        }
        shutdown.trigger();
    }))
}

#[cfg(not(unix))]
pub fn spawn_signal_listener(shutdown: Shutdown) -> io::Result<tokio::task::JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received"),
            Err(e) => tracing::warn!(error = %e, "Ctrl+C handler failed"),
        }
        shutdown.trigger();
    }))
}
