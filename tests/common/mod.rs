//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use spa_dev_server::server::{self, ConnectionSettings};
use spa_dev_server::{Config, SpaRouter};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Bytes of a file under the fixture site
pub fn site_file(path: &str) -> Vec<u8> {
    std::fs::read(fixtures_dir().join("site").join(path)).unwrap()
}

/// A server on an ephemeral loopback port serving the fixture site
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let mut config = Config::defaults().unwrap();
        config.logging.access_log = false;
        let root = config.resolve_root(&fixtures_dir()).unwrap();
        let router = Arc::new(SpaRouter::new(&config, root).unwrap());

        let listener = server::create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::run_server_loop(
            listener,
            router,
            ConnectionSettings::from(&config.performance),
            async move {
                let _ = rx.await;
                Ok::<(), std::io::Error>(())
            },
        ));

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// Signal shutdown and wait for the accept loop to return
    pub async fn stop(&mut self) -> std::io::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.await.unwrap(),
            None => Ok(()),
        }
    }
}

pub fn client() -> Client<HttpConnector, Empty<Bytes>> {
    Client::builder(TokioExecutor::new()).build_http()
}

/// Send a request and collect the full response
pub async fn send(
    addr: SocketAddr,
    method: Method,
    path: &str,
) -> (Response<()>, Bytes) {
    let req = Request::builder()
        .method(method)
        .uri(format!("http://{addr}{path}"))
        .body(Empty::new())
        .unwrap();
    let resp = client().request(req).await.unwrap();
    let (parts, body) = resp.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    (Response::from_parts(parts, ()), bytes)
}
