//! Shared CLI type definitions for diagramd build and runtime.
//!
//! This crate defines the launcher's command-line surface once, so that both
//! `build.rs` (man page generation) and the runtime binary consume identical
//! types without brittle `#[path = ...]` includes.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments accepted by the `diagramd` launcher.
///
/// Every flag is optional; unset values fall back to `DIAGRAMD_*`
/// environment variables and then to built-in defaults, so a bare
/// invocation serves the executable's own directory on port 8000.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "diagramd",
    version,
    about = "Serve the interactive streaming standards diagram over local HTTP"
)]
pub struct Cli {
    /// TCP port to listen on (all interfaces).
    #[arg(long, value_name = "N")]
    pub port: Option<u16>,

    /// Directory to serve instead of the executable's own directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Do not open the diagram in the default browser after startup.
    #[arg(long)]
    pub no_browser: bool,
}
