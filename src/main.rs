//! Binary entry point for the `diagramd` launcher.
//!
//! The runtime logic lives in the `diagramd` library; this binary wires up
//! logging, loads configuration, and maps launch failures onto the process
//! exit status: any fatal startup error exits 1, an operator interrupt
//! exits 0.

#![expect(
    clippy::print_stderr,
    reason = "fatal launch errors are reported on stderr"
)]

use std::{io, process::ExitCode};

use diagramd::{config::AppConfig, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("❌ {err}");
            return ExitCode::FAILURE;
        }
    };

    match server::run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
