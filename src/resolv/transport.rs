//! The UDP and TCP transports.
//!
//! These are deliberately simple blocking transports: one request,
//! one response, with the socket timeout as the only cancellation
//! mechanism. The resolver engine above them decides which transport
//! to use, when to fail over, and when to keep a TCP connection for
//! later requests.

use super::error::{Error, ErrorKind, Result};
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::net::{TcpStream, UdpSocket};
use std::time::Duration;
use tracing::debug;

//------------ UDP -----------------------------------------------------------

/// Performs one message exchange over UDP.
///
/// The socket is connected to the server, so only its replies are
/// received. A single datagram of up to `recv_size` octets is read;
/// if nothing arrives within `timeout`, the exchange fails with a
/// [`SocketTimeout`][ErrorKind::SocketTimeout] error.
pub fn udp_exchange(
    server: SocketAddr,
    local: Option<SocketAddr>,
    request: &[u8],
    timeout: Duration,
    recv_size: usize,
) -> Result<Vec<u8>> {
    let local = local.unwrap_or_else(|| any_local(server));
    let socket = UdpSocket::bind(local).map_err(|err| {
        Error::new(ErrorKind::NsInvalidSocket, err.to_string())
    })?;
    socket.connect(server)?;
    socket.set_read_timeout(Some(timeout))?;
    debug!("sending {} octets to {} via UDP", request.len(), server);
    socket.send(request)?;
    let mut buf = vec![0u8; recv_size];
    let len = socket.recv(&mut buf)?;
    buf.truncate(len);
    Ok(buf)
}

/// Returns the unspecified local address matching the server family.
fn any_local(server: SocketAddr) -> SocketAddr {
    match server {
        SocketAddr::V4(_) => {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        }
        SocketAddr::V6(_) => {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        }
    }
}

//------------ TCP -----------------------------------------------------------

/// Opens a TCP connection to a server.
///
/// If a local address is given, the socket is bound to it before
/// connecting, which needs to go through a raw socket.
pub fn tcp_connect(
    server: SocketAddr,
    local: Option<SocketAddr>,
    timeout: Duration,
) -> Result<TcpStream> {
    let stream = match local {
        Some(local) => {
            let socket = socket2::Socket::new(
                socket2::Domain::for_address(server),
                socket2::Type::STREAM,
                None,
            )
            .map_err(|err| {
                Error::new(ErrorKind::NsInvalidSocket, err.to_string())
            })?;
            socket.bind(&local.into()).map_err(|err| {
                Error::new(ErrorKind::NsInvalidSocket, err.to_string())
            })?;
            socket.connect_timeout(&server.into(), timeout)?;
            socket.into()
        }
        None => TcpStream::connect_timeout(&server, timeout)?,
    };
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;
    Ok(stream)
}

/// Sends one length-prefixed message over a TCP stream.
pub fn tcp_send(stream: &mut TcpStream, request: &[u8]) -> Result<()> {
    // The message is preceded by its length in two octets, network
    // byte order.
    let len = u16::try_from(request.len()).map_err(|_| {
        Error::new(ErrorKind::PacketInvalid, "message too long")
    })?;
    stream.write_all(&len.to_be_bytes())?;
    stream.write_all(request)?;
    Ok(())
}

/// Reads one length-prefixed message from a TCP stream.
pub fn tcp_recv(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let mut len = [0u8; 2];
    stream.read_exact(&mut len)?;
    let len = usize::from(u16::from_be_bytes(len));
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf)?;
    Ok(buf)
}

/// Performs one message exchange over an established TCP stream.
pub fn tcp_exchange(
    stream: &mut TcpStream,
    request: &[u8],
) -> Result<Vec<u8>> {
    debug!("sending {} octets via TCP", request.len());
    tcp_send(stream, request)?;
    tcp_recv(stream)
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn udp_echo_exchange() {
        // A little echo server on the loopback interface.
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let server_addr = server.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let mut buf = [0u8; 512];
            let (len, peer) = server.recv_from(&mut buf).unwrap();
            server.send_to(&buf[..len], peer).unwrap();
        });
        let reply = udp_exchange(
            server_addr,
            None,
            b"hello",
            Duration::from_secs(5),
            512,
        )
        .unwrap();
        assert_eq!(reply, b"hello");
        handle.join().unwrap();
    }

    #[test]
    fn udp_timeout() {
        // Nobody reads from this socket, so the exchange times out.
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let server_addr = server.local_addr().unwrap();
        let err = udp_exchange(
            server_addr,
            None,
            b"hello",
            Duration::from_millis(50),
            512,
        )
        .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::SocketTimeout);
    }

    #[test]
    fn tcp_framing() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = tcp_recv(&mut stream).unwrap();
            assert_eq!(request, b"ping");
            tcp_send(&mut stream, b"pong").unwrap();
        });
        let mut stream =
            tcp_connect(addr, None, Duration::from_secs(5)).unwrap();
        let reply = tcp_exchange(&mut stream, b"ping").unwrap();
        assert_eq!(reply, b"pong");
        handle.join().unwrap();
    }
}
