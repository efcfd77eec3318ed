// Connection handling module
// Serves a single TCP connection on its own task

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::PerformanceConfig;
use crate::handler::{self, SpaRouter};
use crate::logger;

/// Per-connection HTTP settings
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub keep_alive: bool,
    pub timeout: Duration,
}

impl From<&PerformanceConfig> for ConnectionSettings {
    fn from(perf: &PerformanceConfig) -> Self {
        Self {
            keep_alive: perf.keep_alive,
            timeout: Duration::from_secs(perf.connection_timeout),
        }
    }
}

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive
/// 3. Serves the connection with the SPA router
/// 4. Drops the connection once the timeout elapses
pub fn spawn_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    router: Arc<SpaRouter>,
    settings: ConnectionSettings,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(settings.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&router), peer_addr)),
        );

        match tokio::time::timeout(settings.timeout, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    settings.timeout.as_secs()
                ));
            }
        }
    });
}
