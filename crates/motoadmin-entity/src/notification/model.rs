//! Normalized notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::{AppointmentId, NotificationId, OrderId, ProductId};

use super::kind::NotificationKind;

/// A notification in the operator feed, after normalization.
///
/// Every optional field of the raw record is defaulted to an empty or zero
/// value here so that downstream rendering never has to branch on absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Resolved identity; see [`RawNotification::resolved_id`](super::raw::RawNotification::resolved_id).
    pub id: NotificationId,
    /// Normalized notification kind.
    pub kind: NotificationKind,
    /// The order this notification concerns, if any.
    pub order_id: Option<OrderId>,
    /// The appointment this notification concerns, if any.
    pub appointment_id: Option<AppointmentId>,
    /// Kind-specific descriptive fields; opaque to reconciliation.
    pub payload: NotificationPayload,
    /// Human-readable message shown in the feed.
    pub message: String,
    /// Cancellation reason, when the customer supplied one.
    pub reason: String,
    /// Raw upstream status string.
    pub status: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the operator has read this notification.
    pub read: bool,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Whether this notification matches the given event keys, by resolved
    /// id or by correlated order reference.
    pub fn matches(&self, id: Option<&NotificationId>, order_id: Option<&OrderId>) -> bool {
        id.is_some_and(|id| *id == self.id)
            || order_id.is_some_and(|oid| self.order_id.as_ref() == Some(oid))
    }
}

/// Kind-specific descriptive fields carried by a notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Delivery address for order notifications.
    pub delivery_address: String,
    /// Payment method label.
    pub payment_method: String,
    /// Order total.
    pub total_order: f64,
    /// Free-form operator notes.
    pub notes: String,
    /// Ordered line items.
    pub items: Vec<LineItem>,
    /// Payment and cancellation details.
    pub payment: PaymentDetails,
}

/// A single ordered line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// The catalog product ordered.
    pub product_id: Option<ProductId>,
    /// Product display name.
    pub product_name: String,
    /// Product specification text.
    pub specification: String,
    /// Unit price.
    pub price: f64,
    /// Product image URL.
    pub image: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Per-item fulfillment status.
    pub status: String,
}

/// Payment-side details, including the cancellation trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Cancellation status as reported by the payment record.
    pub cancellation_status: String,
    /// Reason the customer gave for cancelling.
    pub cancellation_reason: String,
    /// When the order was cancelled, if it was.
    pub cancelled_at: Option<DateTime<Utc>>,
}
