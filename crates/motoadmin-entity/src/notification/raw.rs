//! Raw notification records as received from the backend.
//!
//! The REST fetch and the push channel deliver the same record shape. All
//! fields are optional on the wire; normalization into
//! [`Notification`](super::model::Notification) applies the defaulting
//! rules so the rest of the console never sees a partial record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::{AppointmentId, NotificationId, OrderId, ProductId};

use super::kind::NotificationKind;
use super::model::{LineItem, Notification, NotificationPayload, PaymentDetails};

/// A notification record exactly as the backend serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNotification {
    /// Primary identifier (Mongo-style object id).
    #[serde(rename = "_id")]
    pub primary_id: Option<String>,
    /// Secondary identifier, present on some event payloads instead of
    /// the primary one.
    pub id: Option<String>,
    /// Correlated order reference.
    pub order_id: Option<OrderId>,
    /// Correlated appointment reference.
    pub appointment_id: Option<AppointmentId>,
    /// Customer display name.
    pub customer_name: Option<String>,
    /// Customer email address.
    pub customer_email: Option<String>,
    /// Customer phone number.
    pub customer_phone: Option<String>,
    /// Delivery address.
    pub delivery_address: Option<String>,
    /// Payment method label.
    pub payment_method: Option<String>,
    /// Order total.
    pub total_order: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Ordered line items.
    pub items: Option<Vec<RawLineItem>>,
    /// Payment and cancellation details.
    pub payment: Option<RawPayment>,
    /// Raw kind label; normalized through [`NotificationKind::from_label`].
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Cancellation reason.
    pub reason: Option<String>,
    /// Raw status string.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Read timestamp; its presence is what marks the record as read.
    pub read_at: Option<DateTime<Utc>>,
}

/// A raw order line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLineItem {
    /// The product ordered.
    pub product: Option<RawLineProduct>,
    /// Quantity ordered.
    pub quantity: Option<u32>,
    /// Per-item fulfillment status.
    pub status: Option<String>,
}

/// The product snapshot embedded in a raw line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLineProduct {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: Option<ProductId>,
    /// Product display name.
    pub product_name: Option<String>,
    /// Specification text.
    pub specification: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
    /// Image URL.
    pub image: Option<String>,
}

/// Raw payment details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPayment {
    /// Cancellation status.
    pub cancellation_status: Option<String>,
    /// Cancellation reason.
    pub cancellation_reason: Option<String>,
    /// When the order was cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl RawNotification {
    /// Resolve the record's identity: the primary identifier, falling back
    /// to the secondary one. Empty strings count as absent.
    pub fn resolved_id(&self) -> Option<NotificationId> {
        self.primary_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.id.as_deref().filter(|s| !s.is_empty()))
            .map(NotificationId::from)
    }

    /// Normalize into a [`Notification`], dropping the record when it
    /// carries no identity at all. Used on the bulk fetch path, where an
    /// id-less record is a data-quality problem rather than something the
    /// feed can act on.
    pub fn normalize(self) -> Option<Notification> {
        match self.resolved_id() {
            Some(id) => Some(self.into_notification(id)),
            None => {
                tracing::warn!("Dropping fetched notification without identity");
                None
            }
        }
    }

    /// Normalize into a [`Notification`], synthesizing a locally-unique
    /// identity when both identifier fields are absent. Used on the live
    /// `create` path so a degraded event still reaches the operator.
    pub fn normalize_or_synthesize(self) -> Notification {
        let id = self.resolved_id().unwrap_or_else(|| {
            let id = NotificationId::synthetic();
            tracing::warn!("Push notification arrived without identity, synthesized '{}'", id);
            id
        });
        self.into_notification(id)
    }

    fn into_notification(self, id: NotificationId) -> Notification {
        let kind_label = self.kind.as_deref().unwrap_or("order");
        let kind = NotificationKind::from_label(kind_label);
        let message = self
            .message
            .unwrap_or_else(|| format!("Notification: {kind_label}"));

        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                let product = item.product.unwrap_or_default();
                LineItem {
                    product_id: product.id,
                    product_name: product.product_name.unwrap_or_default(),
                    specification: product.specification.unwrap_or_default(),
                    price: product.price.unwrap_or_default(),
                    image: product.image.unwrap_or_default(),
                    quantity: item.quantity.unwrap_or_default(),
                    status: item.status.unwrap_or_default(),
                }
            })
            .collect();

        let payment = self.payment.unwrap_or_default();

        Notification {
            id,
            kind,
            order_id: self.order_id,
            appointment_id: self.appointment_id,
            payload: NotificationPayload {
                customer_name: self.customer_name.unwrap_or_default(),
                customer_email: self.customer_email.unwrap_or_default(),
                customer_phone: self.customer_phone.unwrap_or_default(),
                delivery_address: self.delivery_address.unwrap_or_default(),
                payment_method: self.payment_method.unwrap_or_default(),
                total_order: self.total_order.unwrap_or_default(),
                notes: self.notes.unwrap_or_default(),
                items,
                payment: PaymentDetails {
                    cancellation_status: payment.cancellation_status.unwrap_or_default(),
                    cancellation_reason: payment.cancellation_reason.unwrap_or_default(),
                    cancelled_at: payment.cancelled_at,
                },
            },
            message,
            reason: self.reason.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            read: self.read_at.is_some(),
        }
    }
}
