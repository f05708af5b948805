//! Static-file server runtime: bind, announce, serve, graceful shutdown.
//!
//! Static-file semantics are delegated wholly to tower-http's [`ServeDir`]
//! (GET returns the file's bytes, missing paths return 404); nothing here
//! inspects request paths. The binary stays thin by calling [`run`], while
//! integration tests drive [`Server`] directly with an ephemeral port and a
//! caller-supplied shutdown future.

#![expect(
    clippy::print_stdout,
    reason = "intentional console output for launcher status"
)]

use std::{future::Future, io, net::SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    browser,
    config::AppConfig,
    docroot::DocRoot,
    error::LaunchError,
};

/// A bound listener paired with the document root it will serve.
///
/// The listener is the sole owner of its port; the OS releases the port when
/// the server is dropped or its serve loop returns.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    root: DocRoot,
}

impl Server {
    /// Bind a listener on all interfaces at `port`.
    ///
    /// Binding only happens after the document precondition has passed,
    /// because constructing a [`DocRoot`] is the only way to call this.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::PortInUse`] when another process already owns
    /// the port, and [`LaunchError::Bind`] for any other bind failure.
    pub async fn bind(port: u16, root: DocRoot) -> Result<Self, LaunchError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            if e.kind() == io::ErrorKind::AddrInUse {
                LaunchError::PortInUse { port }
            } else {
                LaunchError::Bind { port, source: e }
            }
        })?;
        Ok(Self { listener, root })
    }

    /// Address the listener is bound to; resolves port 0 to the real port.
    ///
    /// # Errors
    ///
    /// Propagates the OS error when the socket's local address is
    /// unavailable.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Document root served by this listener.
    #[must_use]
    pub fn root(&self) -> &DocRoot {
        &self.root
    }

    /// Serve requests until an interrupt or termination signal arrives.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from the accept loop.
    pub async fn serve(self) -> Result<(), LaunchError> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve requests until `shutdown` completes.
    ///
    /// Requests are independent and stateless; every response is produced by
    /// the static-file service from the document root. When `shutdown`
    /// resolves the accept loop unwinds, in-flight responses finish, and the
    /// listening socket closes.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from the accept loop.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), LaunchError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Router::new()
            .fallback_service(ServeDir::new(self.root.dir()))
            .layer(TraceLayer::new_for_http());

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Run the full startup sequence and serve until a signal arrives.
///
/// Order matters for behavioral compatibility: resolve the document root
/// (fatal when the diagram file is absent, before any socket exists), bind
/// the listener, announce the serving directory and URLs, open the browser
/// best-effort, then block in the serve loop. An operator interrupt is a
/// normal shutdown, reported with a notice and `Ok(())`.
///
/// # Errors
///
/// Returns the fatal [`LaunchError`] from docroot resolution, the bind, or
/// the serve loop.
pub async fn run(cfg: AppConfig) -> Result<(), LaunchError> {
    let root = DocRoot::resolve(cfg.root.as_deref())?;
    let server = Server::bind(cfg.port, root).await?;

    // Announce the port actually bound so `--port 0` stays usable.
    let port = server.local_addr()?.port();
    announce(server.root(), port);

    if cfg.open_browser {
        let url = DocRoot::document_url(port);
        drop(tokio::task::spawn_blocking(move || browser::open_url(&url)));
    }

    server.serve().await?;
    println!("\n🛑 Server stopped by user");
    Ok(())
}

/// Print the human-readable startup status lines.
fn announce(root: &DocRoot, port: u16) {
    println!("🚀 Starting local web server...");
    println!("📁 Serving files from: {}", root.dir().display());
    println!("🌐 Server running at: {}", DocRoot::server_url(port));
    println!("📄 Open this URL: {}", DocRoot::document_url(port));
    println!("\n💡 Press Ctrl+C to stop the server");
    println!("{}", "-".repeat(60));
}

/// Waits for a shutdown signal, completing when termination is requested.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        if let Err(err) = res {
                            tracing::warn!(%err, "failed to listen for Ctrl-C");
                        }
                    },
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to install SIGTERM handler");
                wait_for_ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        wait_for_ctrl_c().await;
    }
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for Ctrl-C");
    }
}
