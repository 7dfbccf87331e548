//! Push-channel abstraction and scoped subscriptions.
//!
//! A feed acquires a [`Subscription`] on activation and drops it on
//! deactivation or auth change. Each subscription is the single consumer
//! for its feed instance, so an event can never be applied twice through
//! two handlers that both outlived a re-subscribe.

use tokio::sync::broadcast;

use crate::event::NotificationEvent;

/// What a subscription yields.
#[derive(Debug, Clone)]
pub enum ChannelSignal {
    /// A notification event delivered by the backend.
    Event(NotificationEvent),
    /// The underlying connection dropped and was re-established. Owners
    /// should refetch, since events may have been missed in between.
    Reconnected,
}

/// A source of push-channel signals.
pub trait PushChannel: Send + Sync {
    /// Open a scoped subscription. Dropping the returned handle releases it.
    fn subscribe(&self) -> Subscription;
}

/// A live, scoped subscription to the push channel.
///
/// Signals are received in channel-delivery order for the lifetime of the
/// handle.
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<ChannelSignal>,
}

impl Subscription {
    pub(crate) fn new(rx: broadcast::Receiver<ChannelSignal>) -> Self {
        Self { rx }
    }

    /// Receive the next signal. Returns `None` once the channel is closed.
    ///
    /// A lagged receiver (consumer slower than the buffer) logs and skips
    /// ahead rather than failing; the next reconnect-triggered refetch
    /// restores anything missed.
    pub async fn next(&mut self) -> Option<ChannelSignal> {
        loop {
            match self.rx.recv().await {
                Ok(signal) => return Some(signal),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Subscription lagged, skipped {} signals", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// In-process push channel.
///
/// Used by tests to script event sequences, and usable as a local bridge
/// when embedding the feed without a network connection.
#[derive(Debug, Clone)]
pub struct MemoryChannel {
    tx: broadcast::Sender<ChannelSignal>,
}

impl MemoryChannel {
    /// Create a new in-process channel with the given buffer size.
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Deliver an event to all live subscriptions.
    pub fn emit(&self, event: NotificationEvent) {
        let _ = self.tx.send(ChannelSignal::Event(event));
    }

    /// Signal a reconnect to all live subscriptions.
    pub fn emit_reconnected(&self) {
        let _ = self.tx.send(ChannelSignal::Reconnected);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl PushChannel for MemoryChannel {
    fn subscribe(&self) -> Subscription {
        Subscription::new(self.tx.subscribe())
    }
}
