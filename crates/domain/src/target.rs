use crate::dialect::{Dialect, TransportKind};
use std::path::{Path, PathBuf};

/// One configured control socket to poll.
///
/// Built once while configuration is processed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    instance: String,
    dialect: Dialect,
    socket_path: PathBuf,
    command: String,
    transport_kind: TransportKind,
}

impl Target {
    /// Creates a target with the dialect's default socket, command and transport.
    pub fn new(instance: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            instance: instance.into(),
            dialect,
            socket_path: PathBuf::from(dialect.default_socket()),
            command: dialect.default_command(),
            transport_kind: dialect.transport_kind(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_socket_path(mut self, socket_path: impl Into<PathBuf>) -> Self {
        self.socket_path = socket_path.into();
        self
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.transport_kind
    }
}
