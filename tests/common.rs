//! Shared helpers for integration tests.

use std::{
    error::Error,
    fs,
    io::{Read, Write},
    net::{SocketAddr, TcpStream},
};

use diagramd::docroot::DOCUMENT;

/// Boxed error type used by test helpers.
pub type AnyError = Box<dyn Error + Send + Sync>;

/// Minimal HTTP response captured by [`http_get`].
pub struct HttpResponse {
    /// Status code from the response line.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

/// Issue a blocking `GET` for `path` against `addr` and read the response.
///
/// Sends `Connection: close` so EOF delimits the body; suitable for the
/// fixed-length responses a static-file server produces.
///
/// # Errors
///
/// Returns any socket failure or a malformed response.
pub fn http_get(addr: SocketAddr, path: &str) -> Result<HttpResponse, AnyError> {
    let mut stream = TcpStream::connect(addr)?;
    write!(
        stream,
        "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
    )?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw)?;

    let header_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or("malformed response: missing header terminator")?
        + 4;
    let status = std::str::from_utf8(&raw[..header_end])?
        .split_whitespace()
        .nth(1)
        .ok_or("malformed response: missing status code")?
        .parse()?;

    Ok(HttpResponse {
        status,
        body: raw[header_end..].to_vec(),
    })
}

/// Create a temporary serving directory containing the diagram document.
///
/// # Panics
///
/// Panics when the directory or document cannot be created.
#[must_use]
pub fn diagram_root(content: &[u8]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join(DOCUMENT), content).expect("write document");
    dir
}
