use std::io;
use thiserror::Error;
use tokio_tungstenite::tungstenite::error::UrlError;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid WebSocket URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: UrlError,
    },

    #[error("failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("UDP receive failed: {0}")]
    Receive(#[source] io::Error),

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
}
