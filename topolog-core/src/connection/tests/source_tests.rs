use crate::connection::websocket::{Session, forward};
use crate::connection::{bind_udp, read_lines, receive_udp};
use futures_util::stream;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

async fn drain(mut rx: mpsc::Receiver<String>) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(msg) = rx.recv().await {
        out.push(msg);
    }
    out
}

#[tokio::test]
async fn lines_are_forwarded_and_blank_lines_skipped() {
    let input: &[u8] = b"{\"a\":1}\n\n   \n{\"b\":2}\nlast";
    let (tx, rx) = mpsc::channel(8);

    read_lines(input, tx).await.unwrap();

    assert_eq!(drain(rx).await, vec!["{\"a\":1}", "{\"b\":2}", "last"]);
}

#[tokio::test]
async fn reading_stops_when_consumer_is_gone() {
    let input: &[u8] = b"one\ntwo\n";
    let (tx, rx) = mpsc::channel(8);
    drop(rx);

    assert!(read_lines(input, tx).await.is_ok());
}

#[tokio::test]
async fn websocket_frames_are_decoded() {
    let frames = stream::iter(vec![
        Ok(Message::Text("first".into())),
        Ok(Message::Binary(vec![0xffu8, 0xfe].into())),
        Ok(Message::Ping(Default::default())),
        Ok(Message::Binary(b"second".to_vec().into())),
        Ok(Message::Text("third".into())),
    ]);
    let (tx, rx) = mpsc::channel(8);

    let session = forward(frames, &tx).await;
    drop(tx);

    assert!(matches!(session, Session::Reconnect));
    assert_eq!(drain(rx).await, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn websocket_close_ends_the_session() {
    let frames = stream::iter(vec![
        Ok(Message::Text("before".into())),
        Ok(Message::Close(None)),
        Ok(Message::Text("after".into())),
    ]);
    let (tx, rx) = mpsc::channel(8);

    let session = forward(frames, &tx).await;
    drop(tx);

    assert!(matches!(session, Session::Reconnect));
    assert_eq!(drain(rx).await, vec!["before"]);
}

#[tokio::test]
async fn websocket_error_ends_the_session() {
    let frames = stream::iter(vec![
        Ok(Message::Text("before".into())),
        Err(WsError::ConnectionClosed),
    ]);
    let (tx, rx) = mpsc::channel(8);

    let session = forward(frames, &tx).await;
    drop(tx);

    assert!(matches!(session, Session::Reconnect));
    assert_eq!(drain(rx).await, vec!["before"]);
}

#[tokio::test]
async fn websocket_session_finishes_without_consumer() {
    let frames = stream::iter(vec![Ok(Message::Text("orphan".into()))]);
    let (tx, rx) = mpsc::channel(8);
    drop(rx);

    assert!(matches!(forward(frames, &tx).await, Session::Finished));
}

#[tokio::test]
async fn udp_datagrams_become_messages() {
    let socket = bind_udp("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let (tx, mut rx) = mpsc::channel(8);
    let receiver = tokio::spawn(receive_udp(socket, tx));

    let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    sender.send_to(&[0xff, 0x00], addr).await.unwrap();
    sender.send_to(b"{\"level\":\"INFO\"}", addr).await.unwrap();

    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(msg, "{\"level\":\"INFO\"}");

    receiver.abort();
}

#[tokio::test]
async fn binding_a_bad_address_fails() {
    assert!(bind_udp("not an address").await.is_err());
}
