mod cli;
mod config;
mod mode;
mod shim;

use anyhow::Result;
use config::Config;
use mode::Mode;
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter variable for diagnostic logging, e.g. `FPIN_LOG=debug`.
const LOG_ENV: &str = "FPIN_LOG";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fpin: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let argv0 = env::args_os().next().unwrap_or_default();
    let Some(mode) = Mode::detect(&argv0) else {
        let program = Path::new(&argv0).file_name().unwrap_or_default();
        anyhow::bail!("unexpected program name '{}'", program.to_string_lossy());
    };

    let config = Config::from_env()?;
    match mode {
        Mode::Cli => cli::run(&config),
        Mode::Shim(binary) => shim::run(&config, &binary),
    }
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout is reserved for command output that
    // shells may eval or capture.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
