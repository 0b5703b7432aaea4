use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// WebSocket endpoint standing in for the log relay.
///
/// Every connected client receives every frame sent after it connected.
pub struct LogStreamServer {
    addr: SocketAddr,
    frames: broadcast::Sender<Message>,
    accepted: Arc<AtomicUsize>,
}

impl LogStreamServer {
    /// Bind on a free localhost port and start accepting. Must be called
    /// inside a tokio runtime.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind log stream server");
        let addr = listener.local_addr().unwrap();

        let (frames, _) = broadcast::channel(256);
        let accepted = Arc::new(AtomicUsize::new(0));

        let tx = frames.clone();
        let counter = Arc::clone(&accepted);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let Ok(mut socket) = accept_async(stream).await else {
                    continue;
                };

                // Subscribe before announcing the client so no frame sent
                // after `wait_for_clients` is missed.
                let mut rx = tx.subscribe();
                counter.fetch_add(1, Ordering::SeqCst);

                tokio::spawn(async move {
                    while let Ok(frame) = rx.recv().await {
                        let closing = matches!(frame, Message::Close(_));
                        if socket.send(frame).await.is_err() || closing {
                            break;
                        }
                    }
                    // Drain until the client acknowledges the close.
                    while let Some(Ok(_)) = socket.next().await {}
                });
            }
        });

        Self {
            addr,
            frames,
            accepted,
        }
    }

    pub fn url(&self) -> String {
        format!("ws://{}/logs", self.addr)
    }

    /// Connections accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Poll until at least `n` connections were accepted (or panic).
    pub async fn wait_for_clients(&self, n: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);

        while self.accepted() < n {
            if Instant::now() > deadline {
                panic!("expected {n} client connection(s), saw {}", self.accepted());
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    pub fn send_text(&self, text: impl Into<String>) {
        let text: String = text.into();
        self.frames
            .send(Message::Text(text.into()))
            .expect("no client connected");
    }

    pub fn send_binary(&self, bytes: Vec<u8>) {
        self.frames
            .send(Message::Binary(bytes.into()))
            .expect("no client connected");
    }

    /// Close every open connection.
    pub fn disconnect_all(&self) {
        let _ = self.frames.send(Message::Close(None));
    }
}
