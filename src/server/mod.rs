// Server module entry point
// Listener setup, accept loop, per-connection tasks and signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted under another name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use connection::ConnectionSettings;
pub use listener::create_listener;
pub use server_loop::run_server_loop;
pub use signal::{ShutdownListener, ShutdownSignal};
