//! Local static-file server for the interactive streaming standards diagram.
//!
//! The launcher resolves its document root (by default the directory that
//! contains the running executable), verifies the diagram file is present,
//! binds a listener on a fixed port, and serves the directory over plain
//! HTTP until interrupted. On startup it opens the diagram in the host's
//! default browser on a best-effort basis.
//!
//! The runtime pieces live in the library so the binary stays thin and the
//! integration tests can drive startup and shutdown in-process.

pub mod browser;
pub mod config;
pub mod docroot;
pub mod error;
pub mod server;
