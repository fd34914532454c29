mod control_socket_peer;
mod shared_buffer;

#[allow(unused_imports)]
pub use control_socket_peer::*;
#[allow(unused_imports)]
pub use shared_buffer::SharedBuffer;
