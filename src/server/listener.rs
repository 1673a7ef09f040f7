// Listener setup
// Binds the fixed serving port with SO_REUSEADDR so quick restarts are not
// blocked by sockets lingering in TIME_WAIT.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind a `TcpListener` on `addr`.
///
/// Bind failure (port taken, permission denied) is returned to the caller
/// and is fatal at startup; there is no retry or alternate port selection.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allows rebinding the same port right after a previous run exited
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
