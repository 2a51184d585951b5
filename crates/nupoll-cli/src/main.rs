//! # nupoll-cli
//!
//! Waits for a freshly published package version to become available on its
//! registry, retrying on a fixed interval, and fails the surrounding job if it
//! never shows up.
//!
//! Inputs come from flags or from the `INPUT_*` environment variables an
//! automation host sets for its steps. The exit status is non-zero exactly
//! when a failure was signaled.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use nupoll_core::error::{NupollError, NupollResult};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod output;
mod reporter;
mod session;

use output::OutputHandler;

/// Wait for a published package version to be indexed by the registry
#[derive(Parser, Debug)]
#[command(name = "nupoll", about = "Wait for a package version to be indexed", disable_version_flag = true)]
pub struct Cli {
    /// Package name, used verbatim in the probe URL
    #[arg(long, env = "INPUT_PACKAGE")]
    pub package: Option<String>,

    /// Package version, used verbatim in the probe URL
    #[arg(long = "version", value_name = "VERSION", env = "INPUT_VERSION")]
    pub package_version: Option<String>,

    /// Maximum probe attempts; non-numeric values fall back to the default
    #[arg(long, env = "INPUT_ATTEMPTS")]
    pub attempts: Option<String>,

    /// Delay between attempts in milliseconds
    #[arg(long, env = "NUPOLL_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Registry base URL
    #[arg(long, env = "NUPOLL_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "NUPOLL_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to a nupoll.toml file
    #[arg(long, env = "NUPOLL_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting nupoll v{}", env!("CARGO_PKG_VERSION"));

    let output = OutputHandler::new();
    match run_cli(&cli, &output) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            output.failure(&error);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: &Cli, output: &OutputHandler) -> NupollResult<bool> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| NupollError::io("Failed to create async runtime".to_string(), e))?;

    rt.block_on(async {
        let cancel = CancellationToken::new();
        let interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.cancel();
            }
        });

        let passed = session::execute(cli, output, cancel.clone()).await;
        if cancel.is_cancelled() {
            output.warn("Interrupted; the session stopped before its attempt budget was spent");
        }
        passed
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "nupoll={level},nupoll_core={level},nupoll_config={level},nupoll_registry={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("nupoll encountered an unexpected error: {}", panic_info);
        eprintln!("nupoll crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/nupoll/nupoll/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
