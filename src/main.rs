//! Digital Chief of Staff
//!
//! An assistant that helps executives manage communications, delegate
//! routine inquiries and keep institutional knowledge.
//!
//! # Startup
//!
//! ```text
//!   CLI args ──▶ .env into process env ──▶ settings (TOML, optional) ──┐
//!                                                                      ▼
//!   process env ──▶ StartupContext ──▶ logging ──▶ status lines ──▶ READY
//!                                                                     │
//!                                           --hold: wait for SIGTERM ◀┘
//!
//!   any error or panic ──▶ supervisor ──▶ "Failed to start: ..." on stderr, exit 1
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use chief_of_staff::config::env_file::{apply_env_file, DEFAULT_ENV_FILE};
use chief_of_staff::{bootstrap, supervise, BootOptions, BootState};

/// Environment variable naming the settings file.
const CONFIG_ENV: &str = "CHIEF_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "chief-of-staff", version)]
#[command(about = "Digital Chief of Staff service", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Env file with KEY=VALUE overrides; a missing file is ignored
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Keep running after startup until SIGINT/SIGTERM
    #[arg(long)]
    hold: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Populate the process environment while still single-threaded.
    let env_file = apply_env_file(&cli.env_file);
    let config = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            return BootState::Failed.into();
        }
    };

    let options = BootOptions {
        config,
        env_file: Some(env_file),
        hold: cli.hold,
    };

    let state = runtime.block_on(supervise(bootstrap(options)));
    if state == BootState::Ready {
        tracing::debug!("Bootstrap finished");
    }
    state.into()
}
