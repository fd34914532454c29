mod datagram;
mod stream;

pub use datagram::MAX_DATAGRAM_SIZE;

use async_trait::async_trait;
use pdns_stats_application::ports::StatTransport;
use pdns_stats_domain::{Target, TransportError, TransportKind, TransportStep};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;

/// Control-socket transport over Unix domain sockets.
///
/// Datagram exchanges all bind the same local path, so they are serialized
/// through `local_socket_lock`. Stream exchanges need no local address and run
/// unguarded.
pub struct UnixControlSocket {
    local_socket: PathBuf,
    timeout: Option<Duration>,
    local_socket_lock: Mutex<()>,
}

impl UnixControlSocket {
    pub fn new(local_socket: impl Into<PathBuf>) -> Self {
        Self {
            local_socket: local_socket.into(),
            timeout: None,
            local_socket_lock: Mutex::new(()),
        }
    }

    /// Bounds every exchange. Each target gets its own full budget.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<F>(&self, target: &Target, exchange: F) -> Result<String, TransportError>
    where
        F: Future<Output = Result<String, TransportError>>,
    {
        let Some(limit) = self.timeout else {
            return exchange.await;
        };

        tokio::time::timeout(limit, exchange).await.map_err(|_| {
            TransportError::new(
                TransportStep::Timeout,
                target.socket_path(),
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("no complete reply within {:?}", limit),
                ),
            )
        })?
    }
}

#[async_trait]
impl StatTransport for UnixControlSocket {
    async fn query(&self, target: &Target) -> Result<String, TransportError> {
        match target.transport_kind() {
            TransportKind::Datagram => {
                let _local = self.local_socket_lock.lock().await;
                self.bounded(target, datagram::query(&self.local_socket, target))
                    .await
            }
            TransportKind::Stream => self.bounded(target, stream::query(target)).await,
        }
    }
}
