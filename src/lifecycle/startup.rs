//! Startup orchestration.
//!
//! # Responsibilities
//! - Load settings and the startup context
//! - Initialize logging once the operating mode is known
//! - Log how the env file load went (it runs before logging exists)
//! - Emit the status sequence and report readiness
//! - Optionally stay alive until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any error here is fatal and reaches the supervisor
//! - Env file problems are absorbed, never fatal
//! - Steps run in order, never concurrently

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::config::env::StartupContext;
use crate::config::env_file::EnvFileStatus;
use crate::config::loader::{load_optional, ConfigError};
use crate::config::schema::ObservabilityConfig;
use crate::lifecycle::shutdown::{self, Shutdown};
use crate::lifecycle::signals::spawn_signal_listener;
use crate::lifecycle::BootState;
use crate::observability::logging::init_logging;
use crate::output::StatusReporter;

/// Service name shown in the banner.
pub const SERVICE_NAME: &str = "Digital Chief of Staff";

/// Service version shown in the status sequence.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Any failure that prevents the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] std::io::Error),

    #[error("bootstrap task aborted: {0}")]
    Task(String),
}

/// The fixed status sequence for a resolved context.
pub fn status_lines(ctx: &StartupContext) -> [String; 4] {
    [
        format!("{} - Starting...", SERVICE_NAME),
        format!("Version: {}", VERSION),
        format!("Environment: {}", ctx.mode()),
        "Ready to assist!".to_string(),
    ]
}

/// Drives one startup: configuration, status output, readiness.
pub struct BootstrapRunner<W> {
    env_file: Option<EnvFileStatus>,
    environment: Option<StartupContext>,
    logging: Option<ObservabilityConfig>,
    hold: Option<broadcast::Receiver<()>>,
    reporter: StatusReporter<W>,
    state: BootState,
}

impl<W: Write> BootstrapRunner<W> {
    pub fn new(reporter: StatusReporter<W>) -> Self {
        Self {
            env_file: None,
            environment: None,
            logging: None,
            hold: None,
            reporter,
            state: BootState::Starting,
        }
    }

    /// Outcome of the env file load, logged once logging is up.
    pub fn env_file_status(mut self, status: EnvFileStatus) -> Self {
        self.env_file = Some(status);
        self
    }

    /// Use `ctx` in place of the process environment.
    pub fn environment(mut self, ctx: StartupContext) -> Self {
        self.environment = Some(ctx);
        self
    }

    /// Install the global log subscriber once the mode is known.
    pub fn with_logging(mut self, config: ObservabilityConfig) -> Self {
        self.logging = Some(config);
        self
    }

    /// After reporting ready, wait on `rx` before returning.
    pub fn hold_until(mut self, rx: broadcast::Receiver<()>) -> Self {
        self.hold = Some(rx);
        self
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn into_reporter(self) -> StatusReporter<W> {
        self.reporter
    }

    /// Build the startup context from the process environment, which
    /// already holds any env file entries.
    pub fn load_configuration(&self) -> StartupContext {
        match &self.environment {
            Some(ctx) => ctx.clone(),
            None => StartupContext::from_process_env(),
        }
    }

    /// Write status lines to the informational stream.
    pub fn report_status<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reporter.report(lines);
    }

    /// Run the startup sequence. Returns the context it started with.
    pub async fn run(&mut self) -> Result<StartupContext, StartupError> {
        let ctx = self.load_configuration();
        let mode = ctx.operating_mode();

        if let Some(config) = &self.logging {
            if !init_logging(config, &mode) {
                tracing::debug!("Log subscriber already installed");
            }
        }
        if let Some(status) = &self.env_file {
            status.log();
        }

        tracing::info!(mode = %mode, entries = ctx.len(), "Configuration loaded");

        let lines = status_lines(&ctx);
        self.report_status(&lines);
        self.state = BootState::Ready;
        tracing::info!(version = VERSION, "Startup complete");

        if let Some(mut rx) = self.hold.take() {
            tracing::info!("Waiting for shutdown signal");
            shutdown::wait(&mut rx).await;
            tracing::info!("Shutting down");
        }

        Ok(ctx)
    }
}

/// Inputs for a full process bootstrap.
#[derive(Debug, Clone, Default)]
pub struct BootOptions {
    /// Optional TOML settings file. Failing to load it is fatal.
    pub config: Option<PathBuf>,
    /// Outcome of loading the env file into the process environment.
    pub env_file: Option<EnvFileStatus>,
    /// Stay alive after ready until SIGINT/SIGTERM.
    pub hold: bool,
}

/// Bootstrap the service on stdout with the process environment.
pub async fn bootstrap(options: BootOptions) -> Result<(), StartupError> {
    let settings = load_optional(options.config.as_deref()).await?;
    let hold = options.hold || settings.lifecycle.hold;

    let mut runner = BootstrapRunner::new(StatusReporter::stdout())
        .with_logging(settings.observability);
    if let Some(status) = options.env_file {
        runner = runner.env_file_status(status);
    }

    if hold {
        let shutdown = Shutdown::new();
        runner = runner.hold_until(shutdown.subscribe());
        spawn_signal_listener(shutdown).map_err(StartupError::Signal)?;
    }

    runner.run().await?;
    Ok(())
}
