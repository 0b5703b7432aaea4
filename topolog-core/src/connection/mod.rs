//! Record sources.
//!
//! Every source runs as its own task and pushes raw text messages into a
//! bounded channel. [`run_consumer`] drains that channel into a single
//! [`Engine`](crate::engine::Engine), so records are always dispatched one at
//! a time and in arrival order.

mod consumer;
mod error;
mod stdin;
mod udp;
mod websocket;

#[cfg(test)]
mod tests;

pub use consumer::run_consumer;
pub use error::ConnectionError;
pub use stdin::{read_lines, read_stdin};
pub use udp::{MAX_DATAGRAM, bind_udp, receive_udp};
pub use websocket::connect_websocket;

use crate::conf::SourceConfig;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Buffered messages between a source and the consumer.
pub const CHANNEL_CAPACITY: usize = 1024;

/// Start the configured source on the current runtime.
pub fn spawn_source(
    source: &SourceConfig,
    tx: Sender<String>,
) -> JoinHandle<Result<(), ConnectionError>> {
    match source.clone() {
        SourceConfig::WebSocket { url, reconnect_ms } => tokio::spawn(async move {
            connect_websocket(&url, Duration::from_millis(reconnect_ms), tx).await
        }),
        SourceConfig::Udp { bind } => tokio::spawn(async move {
            let socket = bind_udp(&bind).await?;
            receive_udp(socket, tx).await
        }),
        SourceConfig::Stdin => tokio::spawn(read_stdin(tx)),
    }
}
