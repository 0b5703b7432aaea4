use crate::connection::ConnectionError;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

/// Largest datagram the relay sends. Longer datagrams are truncated by the
/// socket.
pub const MAX_DATAGRAM: usize = 1024;

pub async fn bind_udp(addr: &str) -> Result<UdpSocket, ConnectionError> {
    let socket = UdpSocket::bind(addr)
        .await
        .map_err(|source| ConnectionError::Bind {
            addr: addr.to_owned(),
            source,
        })?;

    info!(addr, "listening for UDP log records");
    Ok(socket)
}

/// Forward every datagram as one message.
pub async fn receive_udp(socket: UdpSocket, tx: Sender<String>) -> Result<(), ConnectionError> {
    let mut buf = [0u8; MAX_DATAGRAM];

    loop {
        let (len, peer) = socket
            .recv_from(&mut buf)
            .await
            .map_err(ConnectionError::Receive)?;

        let text = match std::str::from_utf8(&buf[..len]) {
            Ok(text) => text.to_owned(),
            Err(e) => {
                warn!(%peer, error = %e, "dropping datagram that is not UTF-8");
                continue;
            }
        };

        if tx.send(text).await.is_err() {
            return Ok(());
        }
    }
}
