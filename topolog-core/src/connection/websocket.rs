use crate::connection::ConnectionError;
use futures_util::{Stream, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tracing::{debug, info, warn};

pub(super) enum Session {
    /// Stream ended or failed; try again.
    Reconnect,
    /// Consumer is gone.
    Finished,
}

/// Follow a WebSocket log stream, reconnecting after `reconnect` whenever the
/// connection drops. Returns once the consumer stops listening.
pub async fn connect_websocket(
    url: &str,
    reconnect: Duration,
    tx: Sender<String>,
) -> Result<(), ConnectionError> {
    loop {
        match connect_async(url).await {
            Ok((stream, _)) => {
                info!(url, "WebSocket connection opened");
                let session = forward(stream, &tx).await;
                info!(url, "WebSocket connection closed");

                if let Session::Finished = session {
                    return Ok(());
                }
            }
            Err(WsError::Url(source)) => {
                return Err(ConnectionError::InvalidUrl {
                    url: url.to_owned(),
                    source,
                });
            }
            Err(e) => warn!(url, error = %e, "WebSocket connect failed"),
        }

        if tx.is_closed() {
            return Ok(());
        }

        debug!(url, delay_ms = reconnect.as_millis() as u64, "reconnecting");
        tokio::time::sleep(reconnect).await;
    }
}

pub(super) async fn forward<S>(mut stream: S, tx: &Sender<String>) -> Session
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
{
    while let Some(msg) = stream.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text.as_str().to_owned(),
            Ok(Message::Binary(bytes)) => match String::from_utf8(bytes.to_vec()) {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "dropping binary frame that is not UTF-8");
                    continue;
                }
            },
            Ok(Message::Close(frame)) => {
                debug!(?frame, "close frame received");
                return Session::Reconnect;
            }
            // Ping/pong are answered by tungstenite.
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, "WebSocket error");
                return Session::Reconnect;
            }
        };

        if tx.send(text).await.is_err() {
            return Session::Finished;
        }
    }

    Session::Reconnect
}
