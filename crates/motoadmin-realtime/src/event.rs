//! Push-channel event envelopes.
//!
//! The backend frames every push message as `{"event": "...", "data": ...}`.
//! Two event names exist for notifications: `notification:create` carrying
//! a full raw record, and `notification:update` carrying an `action`
//! discriminator with action-specific fields.

use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::{NotificationId, OrderId};
use motoadmin_entity::notification::RawNotification;

/// A notification event as framed on the push channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum NotificationEvent {
    /// A new notification was created.
    #[serde(rename = "notification:create")]
    Created(RawNotification),
    /// An existing notification changed.
    #[serde(rename = "notification:update")]
    Updated(NotificationUpdate),
}

/// The `notification:update` envelope, discriminated by `action`.
///
/// `mark-read` and `delete` may carry either the notification id or the
/// correlated order id; matching accepts both keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum NotificationUpdate {
    /// Mark matching notifications as read.
    MarkRead {
        /// Notification id to match.
        #[serde(default)]
        id: Option<NotificationId>,
        /// Correlated order reference to match.
        #[serde(default, rename = "orderId")]
        order_id: Option<OrderId>,
    },
    /// Remove matching notifications.
    Delete {
        /// Notification id to match.
        #[serde(default)]
        id: Option<NotificationId>,
        /// Correlated order reference to match.
        #[serde(default, rename = "orderId")]
        order_id: Option<OrderId>,
    },
    /// Replace the notification with the attached record. Used by the
    /// cancellation workflow to rewrite kind and message in place.
    Update {
        /// The full replacement record.
        notification: Box<RawNotification>,
    },
}
