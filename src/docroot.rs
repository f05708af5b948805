//! Document-root resolution and the startup precondition check.
//!
//! The serving directory defaults to the directory containing the running
//! executable. It must hold the diagram file before any socket is opened;
//! a missing document is a fatal precondition failure, not retried.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::error::LaunchError;

/// File the launcher exists to serve.
pub const DOCUMENT: &str = "interactive-streaming-standards-diagram.html";

/// A canonicalized serving directory known to contain [`DOCUMENT`].
#[derive(Debug, Clone)]
pub struct DocRoot {
    dir: PathBuf,
}

impl DocRoot {
    /// Resolve the serving directory and verify the document precondition.
    ///
    /// Uses `override_dir` when given, otherwise the directory containing
    /// the running executable. On success the directory becomes the process
    /// working directory, so relative paths resolve against it for the rest
    /// of the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::DocumentMissing`] when [`DOCUMENT`] is not a
    /// regular file directly inside the directory, and [`LaunchError::Io`]
    /// when the directory cannot be resolved, canonicalized, or entered.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, LaunchError> {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => executable_dir()?,
        };
        let dir = fs::canonicalize(&dir)?;

        let document = dir.join(DOCUMENT);
        if !document.is_file() {
            return Err(LaunchError::DocumentMissing { path: document });
        }

        env::set_current_dir(&dir)?;
        tracing::debug!(dir = %dir.display(), "document root resolved");
        Ok(Self { dir })
    }

    /// Directory whose contents are exposed over HTTP.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of the served document.
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.dir.join(DOCUMENT)
    }

    /// Root URL of the server as reachable from the local host.
    #[must_use]
    pub fn server_url(port: u16) -> String {
        format!("http://localhost:{port}")
    }

    /// URL of the served document.
    #[must_use]
    pub fn document_url(port: u16) -> String {
        format!("http://localhost:{port}/{DOCUMENT}")
    }
}

/// Directory containing the running executable.
fn executable_dir() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| io::Error::other("executable path has no parent directory"))?;
    Ok(dir.to_path_buf())
}
