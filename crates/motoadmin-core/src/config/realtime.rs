//! Push-channel (WebSocket) configuration.

use serde::{Deserialize, Serialize};

/// Push-channel connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// WebSocket URL of the push channel, e.g. `wss://api.example.com/ws`.
    pub url: String,
    /// Maximum reconnection attempts before giving up.
    #[serde(default = "default_reconnect_attempts")]
    pub reconnect_attempts: u32,
    /// Delay between reconnection attempts in milliseconds.
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_ms: u64,
    /// Internal broadcast buffer size for delivered events.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

fn default_reconnect_attempts() -> u32 {
    10
}

fn default_reconnect_delay() -> u64 {
    2000
}

fn default_channel_buffer() -> usize {
    256
}
