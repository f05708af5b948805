//! End-to-end serving behavior over a real socket.

mod common;

use std::net::{SocketAddr, TcpStream};

use diagramd::{
    docroot::{DOCUMENT, DocRoot},
    error::LaunchError,
    server::Server,
};
use serial_test::serial;
use tokio::{sync::oneshot, task::JoinHandle};

use common::{HttpResponse, diagram_root};

/// Bind an ephemeral port over `dir` and serve it on a background task.
async fn start_server(
    dir: &tempfile::TempDir,
) -> (
    SocketAddr,
    oneshot::Sender<()>,
    JoinHandle<Result<(), LaunchError>>,
) {
    let root = DocRoot::resolve(Some(dir.path())).expect("resolve docroot");
    let server = Server::bind(0, root).await.expect("bind ephemeral port");
    let mut addr = server.local_addr().expect("local addr");
    addr.set_ip([127, 0, 0, 1].into());

    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(server.serve_with_shutdown(async move {
        let _ = rx.await;
    }));
    (addr, tx, task)
}

async fn get(addr: SocketAddr, path: String) -> HttpResponse {
    tokio::task::spawn_blocking(move || common::http_get(addr, &path))
        .await
        .expect("join request task")
        .expect("http request")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn serves_document_with_exact_bytes() {
    let content = b"<html><body>diagram</body></html>";
    let dir = diagram_root(content);
    let (addr, shutdown, task) = start_server(&dir).await;

    let resp = get(addr, format!("/{DOCUMENT}")).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, content);

    let _ = shutdown.send(());
    task.await.expect("join").expect("serve");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn missing_path_returns_not_found() {
    let dir = diagram_root(b"<html></html>");
    let (addr, shutdown, task) = start_server(&dir).await;

    let resp = get(addr, "/no-such-page.html".to_owned()).await;
    assert_eq!(resp.status, 404);

    // The server must still be healthy after a 404.
    let resp = get(addr, format!("/{DOCUMENT}")).await;
    assert_eq!(resp.status, 200);

    let _ = shutdown.send(());
    task.await.expect("join").expect("serve");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn serves_sibling_files_in_root() {
    let dir = diagram_root(b"<html></html>");
    std::fs::write(dir.path().join("data.json"), b"{\"ok\":true}").expect("write sibling");
    let (addr, shutdown, task) = start_server(&dir).await;

    let resp = get(addr, "/data.json".to_owned()).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"{\"ok\":true}");

    let _ = shutdown.send(());
    task.await.expect("join").expect("serve");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn shutdown_closes_the_listener() {
    let dir = diagram_root(b"<html></html>");
    let (addr, shutdown, task) = start_server(&dir).await;

    // Reachable before the shutdown signal...
    let resp = get(addr, format!("/{DOCUMENT}")).await;
    assert_eq!(resp.status, 200);

    let _ = shutdown.send(());
    task.await.expect("join").expect("serve loop exits cleanly");

    // ...and the port is released afterwards.
    assert!(TcpStream::connect(addr).is_err());
}
