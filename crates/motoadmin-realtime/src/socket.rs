//! WebSocket push channel.
//!
//! Connects to the backend's push endpoint, decodes JSON text frames into
//! [`NotificationEvent`]s, and fans them out to subscriptions. The
//! connection task reconnects with a configurable attempt budget and emits
//! [`ChannelSignal::Reconnected`] after every re-established connection so
//! owners can refetch whatever was missed.

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use motoadmin_core::config::RealtimeConfig;

use crate::channel::{ChannelSignal, PushChannel, Subscription};
use crate::event::NotificationEvent;

/// Push channel backed by a WebSocket connection.
#[derive(Debug)]
pub struct SocketChannel {
    tx: broadcast::Sender<ChannelSignal>,
    task: JoinHandle<()>,
}

impl SocketChannel {
    /// Spawn the connection task and return the channel handle.
    ///
    /// Connection failures are retried inside the task; callers observe
    /// them only as an eventual close of their subscriptions.
    pub fn connect(config: RealtimeConfig) -> Self {
        let (tx, _) = broadcast::channel(config.channel_buffer_size);
        let task = tokio::spawn(run(config, tx.clone()));
        Self { tx, task }
    }
}

impl PushChannel for SocketChannel {
    fn subscribe(&self) -> Subscription {
        Subscription::new(self.tx.subscribe())
    }
}

impl Drop for SocketChannel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Connection loop: connect, read until the stream ends, back off, retry.
async fn run(config: RealtimeConfig, tx: broadcast::Sender<ChannelSignal>) {
    let mut failed_attempts: u32 = 0;
    let mut connected_before = false;

    loop {
        match connect_async(config.url.as_str()).await {
            Ok((stream, _)) => {
                failed_attempts = 0;
                if connected_before {
                    tracing::info!("Push channel reconnected");
                    let _ = tx.send(ChannelSignal::Reconnected);
                } else {
                    tracing::info!("Push channel connected to {}", config.url);
                }
                connected_before = true;

                read_frames(stream, &tx).await;
                tracing::warn!("Push channel disconnected");
            }
            Err(e) => {
                failed_attempts += 1;
                tracing::warn!(
                    "Push channel connect failed (attempt {}/{}): {}",
                    failed_attempts,
                    config.reconnect_attempts,
                    e
                );
                if failed_attempts >= config.reconnect_attempts {
                    tracing::error!("Push channel giving up after {} attempts", failed_attempts);
                    return;
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(config.reconnect_delay_ms)).await;
    }
}

/// Read frames until the connection ends. Undecodable frames are logged
/// and skipped; they never take the channel down.
async fn read_frames<S>(mut stream: S, tx: &broadcast::Sender<ChannelSignal>)
where
    S: futures::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                match serde_json::from_str::<NotificationEvent>(text.as_str()) {
                    Ok(event) => {
                        let _ = tx.send(ChannelSignal::Event(event));
                    }
                    Err(e) => {
                        tracing::warn!("Skipping undecodable push frame: {}", e);
                    }
                }
            }
            Ok(Message::Close(_)) => return,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Push channel read error: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::SinkExt;

    fn frame(id: &str) -> String {
        format!(r#"{{"event": "notification:create", "data": {{"_id": "{id}"}}}}"#)
    }

    async fn expect_created(sub: &mut Subscription, id: &str) {
        match sub.next().await {
            Some(ChannelSignal::Event(NotificationEvent::Created(raw))) => {
                assert_eq!(raw.primary_id.as_deref(), Some(id));
            }
            other => panic!("expected create for '{id}', got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delivers_frames_and_signals_reconnect() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            // First connection: one frame, then close.
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
            ws.send(Message::text(frame("n1"))).await.unwrap();
            ws.close(None).await.unwrap();

            // Second connection after the client's backoff.
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
            // A malformed frame must be skipped, not kill the connection.
            ws.send(Message::text("{not json")).await.unwrap();
            ws.send(Message::text(frame("n2"))).await.unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let config = RealtimeConfig {
            url: format!("ws://{addr}"),
            reconnect_attempts: 3,
            reconnect_delay_ms: 50,
            channel_buffer_size: 8,
        };
        let channel = SocketChannel::connect(config);
        let mut sub = channel.subscribe();

        expect_created(&mut sub, "n1").await;

        match sub.next().await {
            Some(ChannelSignal::Reconnected) => {}
            other => panic!("expected reconnect signal, got {other:?}"),
        }

        expect_created(&mut sub, "n2").await;
    }
}
