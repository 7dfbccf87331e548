//! # motoadmin-realtime
//!
//! Push-channel plumbing for the console: the wire event envelopes, the
//! scoped subscription handle, an in-memory channel for tests and local
//! wiring, and the WebSocket channel that talks to the real backend.

pub mod channel;
pub mod event;
pub mod socket;

pub use channel::{ChannelSignal, MemoryChannel, PushChannel, Subscription};
pub use event::{NotificationEvent, NotificationUpdate};
pub use socket::SocketChannel;
