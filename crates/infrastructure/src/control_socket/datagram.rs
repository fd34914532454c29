//! Datagram exchange with a recursor control socket.
//!
//! A Unix datagram peer can only answer a sender that has an address, so the
//! request goes out from a socket bound to a local path. The path is removed
//! again on every exit, including cancellation by a timeout.

use pdns_stats_domain::{Target, TransportError, TransportStep};
use socket2::{Domain, SockAddr, Socket, Type};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tokio::net::UnixDatagram;
use tracing::{debug, warn};

/// Largest reply kept; longer datagrams are truncated by the kernel.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// The peer may run as another user and must be able to write replies.
const LOCAL_SOCKET_MODE: u32 = 0o666;

/// Unlinks the local bind path when dropped.
struct LocalSocketFile {
    path: PathBuf,
}

impl Drop for LocalSocketFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to remove local socket");
            }
        }
    }
}

fn remove_stale(path: &Path) -> Result<(), TransportError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(TransportError::new(TransportStep::Unlink, path, e)),
    }
}

fn bind_local(local_path: &Path) -> Result<(UnixDatagram, LocalSocketFile), TransportError> {
    let socket = Socket::new(Domain::UNIX, Type::DGRAM, None)
        .map_err(|e| TransportError::new(TransportStep::Socket, local_path, e))?;

    remove_stale(local_path)?;
    let local_file = LocalSocketFile {
        path: local_path.to_path_buf(),
    };

    let bind = |socket: &Socket| -> io::Result<()> {
        socket.bind(&SockAddr::unix(local_path)?)?;
        socket.set_nonblocking(true)
    };
    bind(&socket).map_err(|e| TransportError::new(TransportStep::Bind, local_path, e))?;

    std::fs::set_permissions(
        local_path,
        std::fs::Permissions::from_mode(LOCAL_SOCKET_MODE),
    )
    .map_err(|e| TransportError::new(TransportStep::Chmod, local_path, e))?;

    let std_socket: std::os::unix::net::UnixDatagram = socket.into();
    let socket = UnixDatagram::from_std(std_socket)
        .map_err(|e| TransportError::new(TransportStep::Socket, local_path, e))?;

    Ok((socket, local_file))
}

/// Sends the command as one datagram (no NUL terminator) and returns the one
/// datagram that comes back.
pub(super) async fn query(local_path: &Path, target: &Target) -> Result<String, TransportError> {
    let (socket, _local_file) = bind_local(local_path)?;
    let peer = target.socket_path();

    socket
        .connect(peer)
        .map_err(|e| TransportError::new(TransportStep::Connect, peer, e))?;

    socket
        .send(target.command().as_bytes())
        .await
        .map_err(|e| TransportError::new(TransportStep::Send, peer, e))?;

    let mut buffer = [0u8; MAX_DATAGRAM_SIZE];
    let received = socket
        .recv(&mut buffer)
        .await
        .map_err(|e| TransportError::new(TransportStep::Recv, peer, e))?;

    debug!(
        instance = target.instance(),
        socket = %peer.display(),
        bytes_received = received,
        "Datagram reply received"
    );

    Ok(String::from_utf8_lossy(&buffer[..received]).into_owned())
}
