// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::{spawn_connection, ConnectionSettings};
use crate::handler::SpaRouter;
use crate::logger;

/// Accept connections and serve each on its own task.
///
/// Returns once `shutdown` completes. Accept errors are logged and the loop
/// keeps going; a failing shutdown future (e.g. a closed signal stream) is
/// returned as the error without the shutdown notice.
pub async fn run_server_loop<S, T>(
    listener: TcpListener,
    router: Arc<SpaRouter>,
    settings: ConnectionSettings,
    shutdown: S,
) -> std::io::Result<T>
where
    S: Future<Output = std::io::Result<T>>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        spawn_connection(stream, peer_addr, Arc::clone(&router), settings);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            signal = &mut shutdown => {
                if signal.is_ok() {
                    logger::log_shutdown();
                }
                return signal;
            }
        }
    }
}
