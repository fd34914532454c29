//! Stream exchange with an authoritative server control socket.
//!
//! The request carries a trailing NUL. The reply has no length prefix and ends
//! when the server closes its side of the connection.

use pdns_stats_domain::{Target, TransportError, TransportStep};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

pub(super) async fn query(target: &Target) -> Result<String, TransportError> {
    let peer = target.socket_path();

    let mut stream = UnixStream::connect(peer)
        .await
        .map_err(|e| TransportError::new(TransportStep::Connect, peer, e))?;

    let mut request = Vec::with_capacity(target.command().len() + 1);
    request.extend_from_slice(target.command().as_bytes());
    request.push(0);

    stream
        .write_all(&request)
        .await
        .map_err(|e| TransportError::new(TransportStep::Send, peer, e))?;

    let mut buffer = Vec::new();
    stream
        .read_to_end(&mut buffer)
        .await
        .map_err(|e| TransportError::new(TransportStep::Recv, peer, e))?;

    debug!(
        instance = target.instance(),
        socket = %peer.display(),
        bytes_received = buffer.len(),
        "Stream reply received"
    );

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
