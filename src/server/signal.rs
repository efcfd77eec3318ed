// Signal handling module
//
// - SIGINT  (Ctrl+C): shutdown
// - SIGTERM:          shutdown
//
// Shutdown stops accepting connections; in-flight requests are not drained.

use std::io;

/// Which signal ended the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

/// Signal handlers installed up front
///
/// Handlers are registered by [`ShutdownListener::register`], so a signal
/// delivered before the accept loop starts polling is not lost.
#[cfg(unix)]
pub struct ShutdownListener {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownListener {
    /// Install the handlers; must run inside a Tokio runtime
    pub fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    /// Wait until the process is asked to stop
    pub async fn recv(mut self) -> io::Result<ShutdownSignal> {
        let received = tokio::select! {
            r = self.sigint.recv() => r.map(|()| ShutdownSignal::Interrupt),
            r = self.sigterm.recv() => r.map(|()| ShutdownSignal::Terminate),
        };
        received.ok_or_else(|| io::Error::other("signal stream closed"))
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(windows)]
pub struct ShutdownListener {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl ShutdownListener {
    pub fn register() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    pub async fn recv(mut self) -> io::Result<ShutdownSignal> {
        self.ctrl_c
            .recv()
            .await
            .map(|()| ShutdownSignal::Interrupt)
            .ok_or_else(|| io::Error::other("signal stream closed"))
    }
}
