#![allow(dead_code)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixDatagram, UnixListener};
use tokio::task::JoinHandle;

/// What a fake datagram peer saw from the collector.
#[derive(Debug)]
pub struct DatagramRequest {
    pub payload: Vec<u8>,
    pub sender: Option<PathBuf>,
    pub sender_mode: Option<u32>,
}

/// Accepts one stream connection, reads the request up to and including its
/// NUL terminator, writes `reply` and closes the connection.
pub fn spawn_stream_server(path: &Path, reply: Vec<u8>) -> JoinHandle<Vec<u8>> {
    let listener = UnixListener::bind(path).unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut byte = [0u8; 1];
        while !request.ends_with(&[0]) {
            let n = stream.read(&mut byte).await.unwrap();
            if n == 0 {
                break;
            }
            request.push(byte[0]);
        }

        stream.write_all(&reply).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    })
}

/// Answers exactly one datagram with `reply`, sent back to the sender's
/// bound address.
pub fn spawn_datagram_peer(path: &Path, reply: Vec<u8>) -> JoinHandle<DatagramRequest> {
    let socket = UnixDatagram::bind(path).unwrap();

    tokio::spawn(async move {
        let mut buffer = vec![0u8; 65536];
        let (len, addr) = socket.recv_from(&mut buffer).await.unwrap();

        let sender = addr.as_pathname().map(Path::to_path_buf);
        let sender_mode = sender
            .as_deref()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.permissions().mode() & 0o777);

        if let Some(sender) = sender.as_deref() {
            socket.send_to(&reply, sender).await.unwrap();
        }

        DatagramRequest {
            payload: buffer[..len].to_vec(),
            sender,
            sender_mode,
        }
    })
}

/// Receives datagrams and never answers.
pub fn spawn_silent_peer(path: &Path) -> JoinHandle<()> {
    let socket = UnixDatagram::bind(path).unwrap();

    tokio::spawn(async move {
        let mut buffer = vec![0u8; 4096];
        while socket.recv_from(&mut buffer).await.is_ok() {}
    })
}
