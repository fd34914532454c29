//! pdns-stats infrastructure: control-socket transports, type registry and sinks
pub mod control_socket;
pub mod sinks;
pub mod types_db;

pub use control_socket::UnixControlSocket;
pub use types_db::TypesDb;
