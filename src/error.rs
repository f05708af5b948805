//! Launch-failure taxonomy.
//!
//! Every fatal startup condition maps onto one variant so the binary can
//! report a descriptive message and exit non-zero. Browser-launch failures
//! are deliberately absent: they are recovered locally and never surface
//! here.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort launcher startup or the serve loop.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The expected diagram file is not present in the serving directory.
    ///
    /// Reported before any socket is opened; `path` is the absolute location
    /// that was checked.
    #[error("{} not found (expected at {})", crate::docroot::DOCUMENT, .path.display())]
    DocumentMissing {
        /// Absolute path where the document was expected.
        path: PathBuf,
    },

    /// Another process already owns the requested port.
    #[error("port {port} is already in use (try a different port: --port {})", .port.saturating_add(1))]
    PortInUse {
        /// The occupied port.
        port: u16,
    },

    /// The listener could not be bound for a reason other than a port
    /// conflict; the underlying OS error is surfaced verbatim.
    #[error("error starting server on port {port}: {source}")]
    Bind {
        /// Port the bind was attempted on.
        port: u16,
        /// The OS-level bind failure.
        source: io::Error,
    },

    /// An environment override could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),

    /// Filesystem or socket I/O failure outside the bind path.
    #[error(transparent)]
    Io(#[from] io::Error),
}
