/*
[INPUT]:  Stream URL, subscription payloads, inbound message handler
[OUTPUT]: Raw inbound frames delivered to the handler; outbound control frames
[POS]:    WebSocket layer - real-time data stream handling
[UPDATE]: When adding new outbound frames or changing connection logic
*/

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

use crate::http::{BlockfactsError, Result};
use crate::ws::message::{StreamPayload, control_frame};

/// BlockFacts streaming endpoint
pub const STREAM_URL: &str = "wss://ws.blockfacts.io/v1/";

const OUTBOUND_CAPACITY: usize = 100;
const RAW_LOG_MAX_BYTES: usize = 1024;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug)]
struct Connection {
    outbound_tx: mpsc::Sender<WsMessage>,
    task: JoinHandle<()>,
}

impl Connection {
    /// Drop the outbound side so the task sends Close, then wait for it to exit.
    async fn shutdown(self) {
        drop(self.outbound_tx);
        if let Err(err) = self.task.await {
            warn!(error = %err, "ws connection task ended abnormally");
        }
    }
}

/// WebSocket client for the BlockFacts stream
///
/// Holds at most one connection. `subscribe` opens it; every other send
/// requires it to be open.
#[derive(Debug)]
pub struct BlockfactsWebSocket {
    url: String,
    connection: Mutex<Option<Connection>>,
}

impl BlockfactsWebSocket {
    /// Create a client for the production stream
    pub fn new() -> Self {
        Self::with_url(STREAM_URL)
    }

    /// Create a client for a custom stream URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connection: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a connection task is currently running
    pub async fn is_connected(&self) -> bool {
        self.connection
            .lock()
            .await
            .as_ref()
            .is_some_and(|connection| !connection.task.is_finished())
    }

    /// Open a connection, send `payload` once the handshake completes, and
    /// hand every inbound text frame to `handler` for the life of the connection.
    ///
    /// An existing connection is closed and awaited first.
    ///
    /// `handler` runs on the connection task between outbound sends, so a slow
    /// handler delays queued `ping`/`pong`/`unsubscribe` frames. Keep it cheap or
    /// forward frames to a channel.
    pub async fn subscribe<F>(&self, payload: impl Into<StreamPayload>, handler: F) -> Result<()>
    where
        F: FnMut(String) + Send + 'static,
    {
        let text = payload.into().into_text()?;
        let mut guard = self.connection.lock().await;

        if let Some(previous) = guard.take() {
            info!(url = %self.url, "ws closing previous connection before resubscribe");
            previous.shutdown().await;
        }

        let (ws_stream, _response) = connect_async(self.url.as_str()).await?;
        info!(url = %self.url, "ws connected");

        let (mut write, read) = ws_stream.split();
        write.send(WsMessage::Text(text.clone().into())).await?;
        log_frame_sent("subscribe", &text);

        let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_CAPACITY);
        let task = tokio::spawn(run_connection(write, read, outbound_rx, handler));
        *guard = Some(Connection { outbound_tx, task });

        Ok(())
    }

    /// Send an unsubscribe payload on the open connection
    pub async fn unsubscribe(&self, payload: impl Into<StreamPayload>) -> Result<()> {
        let text = payload.into().into_text()?;
        self.send_text("unsubscribe", text).await
    }

    /// Ask the server whether it is online: `{"type":"ping"}`
    pub async fn ping(&self) -> Result<()> {
        self.send_text("ping", control_frame("ping")).await
    }

    /// Tell the server the client is still here: `{"type":"pong"}`
    pub async fn pong(&self) -> Result<()> {
        self.send_text("pong", control_frame("pong")).await
    }

    /// Close the current connection, if any, and wait for its task to finish
    pub async fn close(&self) {
        if let Some(connection) = self.connection.lock().await.take() {
            connection.shutdown().await;
            info!(url = %self.url, "ws closed");
        }
    }

    async fn send_text(&self, action: &'static str, text: String) -> Result<()> {
        let sender = {
            let guard = self.connection.lock().await;
            guard
                .as_ref()
                .map(|connection| connection.outbound_tx.clone())
                .ok_or(BlockfactsError::NotConnected)?
        };

        sender
            .send(WsMessage::Text(text.clone().into()))
            .await
            .map_err(|_| BlockfactsError::ChannelClosed)?;

        log_frame_sent(action, &text);
        Ok(())
    }
}

impl Default for BlockfactsWebSocket {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_connection<F>(
    mut write: SplitSink<WsStream, WsMessage>,
    mut read: SplitStream<WsStream>,
    mut outbound_rx: mpsc::Receiver<WsMessage>,
    mut handler: F,
) where
    F: FnMut(String) + Send + 'static,
{
    loop {
        tokio::select! {
            outbound = outbound_rx.recv() => {
                match outbound {
                    Some(message) => {
                        if let Err(err) = write.send(message).await {
                            warn!(error = %err, "ws send failed");
                            break;
                        }
                    }
                    None => {
                        let _ = write.send(WsMessage::Close(None)).await;
                        break;
                    }
                }
            }
            incoming = read.next() => {
                match incoming {
                    Some(Ok(WsMessage::Text(text))) => {
                        debug!(bytes = text.len(), "ws message received");
                        handler(text.to_string());
                    }
                    Some(Ok(WsMessage::Binary(bytes))) => match String::from_utf8(bytes.to_vec()) {
                        Ok(text) => handler(text),
                        Err(_) => debug!(bytes = bytes.len(), "ws binary frame is not utf-8, dropped"),
                    },
                    Some(Ok(WsMessage::Close(frame))) => {
                        info!(frame = ?frame, "ws closed by server");
                        let _ = write.send(WsMessage::Close(None)).await;
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        warn!(error = %err, "ws read failed");
                        break;
                    }
                    None => break,
                }
            }
        }
    }
}

fn log_frame_sent(action: &str, text: &str) {
    let preview = truncate_for_log(text, RAW_LOG_MAX_BYTES);
    info!(action, bytes = text.len(), message = %preview, "ws frame sent");
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 10), "short");
        assert_eq!(truncate_for_log("abcdef", 3), "abc...");
        // multi-byte char straddling the cut
        assert_eq!(truncate_for_log("aé", 2), "a...");
    }

    #[test]
    fn test_default_url() {
        let ws = BlockfactsWebSocket::default();
        assert_eq!(ws.url(), "wss://ws.blockfacts.io/v1/");
    }

    #[tokio::test]
    async fn test_sends_fail_before_subscribe() {
        let ws = BlockfactsWebSocket::new();
        assert!(!ws.is_connected().await);
        assert!(matches!(ws.ping().await, Err(BlockfactsError::NotConnected)));
        assert!(matches!(ws.pong().await, Err(BlockfactsError::NotConnected)));
        assert!(matches!(
            ws.unsubscribe(r#"{"type":"unsubscribe"}"#).await,
            Err(BlockfactsError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_close_without_connection_is_noop() {
        let ws = BlockfactsWebSocket::new();
        ws.close().await;
        assert!(!ws.is_connected().await);
    }
}
