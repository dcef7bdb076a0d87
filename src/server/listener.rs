// Listener construction module

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Listen backlog depth
const BACKLOG: i32 = 128;

/// Bind a non-blocking TCP listener with `SO_REUSEADDR` and `SO_REUSEPORT`.
///
/// The reuse flags let the server rebind its fixed port immediately after a
/// restart, even while sockets from the previous process sit in `TIME_WAIT`.
pub fn bind_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;
    // Tokio requires the socket to be non-blocking
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_an_ephemeral_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("addr");
        let listener = bind_listener(addr).expect("bind");
        let local = listener.local_addr().expect("local addr");
        assert_ne!(local.port(), 0);
    }
}
