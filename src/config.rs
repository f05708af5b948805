//! Runtime configuration merged from defaults, environment, and CLI flags.
//!
//! Precedence is strictly defaults < `DIAGRAMD_*` environment variables <
//! command-line flags, mirroring the layering the CLI help promises. The
//! clap surface itself lives in the `cli-defs` crate so the build script can
//! render a man page from it.

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use cli_defs::Cli;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Port served when neither `--port` nor `DIAGRAMD_PORT` is set.
pub const DEFAULT_PORT: u16 = 8000;

/// Prefix for environment-variable overrides (`DIAGRAMD_PORT`, ...).
const ENV_PREFIX: &str = "DIAGRAMD_";

/// Resolved launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// TCP port bound on all interfaces.
    pub port: u16,
    /// Serving-directory override; the executable's directory when unset.
    pub root: Option<PathBuf>,
    /// Whether to attempt opening the document in the default browser.
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: None,
            open_browser: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Config`] when an environment override cannot
    /// be deserialized (for example a non-numeric `DIAGRAMD_PORT`).
    pub fn load() -> Result<Self, LaunchError> {
        Self::from_cli(Cli::parse())
    }

    /// Load configuration from an explicit argument list.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`].
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_cli(Cli::parse_from(args))
    }

    fn from_cli(cli: Cli) -> Result<Self, LaunchError> {
        let mut cfg: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        // CLI flags take precedence over every other layer.
        if let Some(port) = cli.port {
            cfg.port = port;
        }
        if let Some(root) = cli.root {
            cfg.root = Some(root);
        }
        if cli.no_browser {
            cfg.open_browser = false;
        }
        Ok(cfg)
    }
}
