//! Build script for man page generation.
//!
//! Renders a man page for the `diagramd` binary with `clap_mangen`. The CLI
//! definitions come from the `cli-defs` crate, which keeps build-time and
//! runtime consumers on one surface.

use std::{env, fs, io, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;
use cli_defs::Cli;

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=cli-defs");

    // Cargo does not set OUT_DIR for `cargo check` or IDE analysis runs.
    let Ok(out_dir) = env::var("OUT_DIR") else {
        return Ok(());
    };

    let mut page = Vec::new();
    Man::new(Cli::command()).render(&mut page)?;
    fs::write(PathBuf::from(out_dir).join("diagramd.1"), page)
}
