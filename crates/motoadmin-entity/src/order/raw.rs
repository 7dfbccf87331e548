//! Raw order records as received from the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::ProductId;

/// An order record exactly as the backend serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrder {
    /// Order identifier.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Customer display name.
    pub customer_name: Option<String>,
    /// Customer email address.
    pub customer_email: Option<String>,
    /// Customer phone number.
    pub customer_phone: Option<String>,
    /// Delivery address.
    pub delivery_address: Option<String>,
    /// When the order was placed.
    pub order_date: Option<DateTime<Utc>>,
    /// Record creation timestamp, used when `orderDate` is absent.
    pub created_at: Option<DateTime<Utc>>,
    /// Order total.
    pub total_order: Option<f64>,
    /// Top-level payment method, used when the payment record lacks one.
    pub payment_method: Option<String>,
    /// Payment record.
    pub payment: Option<RawOrderPayment>,
    /// Ordered line items.
    pub items: Option<Vec<RawOrderItem>>,
}

/// A raw order line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrderItem {
    /// Product snapshot.
    pub product: Option<RawOrderProduct>,
    /// Quantity ordered.
    pub quantity: Option<u32>,
    /// Per-item fulfillment status.
    pub status: Option<String>,
}

/// The product snapshot embedded in a raw order item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrderProduct {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: Option<ProductId>,
    /// Product display name.
    pub product_name: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
}

/// Raw payment details of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrderPayment {
    /// Payment status label.
    pub status: Option<String>,
    /// Payment method label.
    pub method: Option<String>,
    /// Payment provider reference.
    pub reference_id: Option<String>,
}
