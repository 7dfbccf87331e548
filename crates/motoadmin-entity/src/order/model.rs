//! Normalized order model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::{OrderId, ProductId};

use super::raw::RawOrder;
use super::status::OrderStatus;

/// An order row for the console's order table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Delivery address.
    pub delivery_address: String,
    /// When the order was placed.
    pub ordered_at: DateTime<Utc>,
    /// Total quantity across all items.
    pub quantity: u32,
    /// Order total.
    pub total: f64,
    /// Payment status label.
    pub payment_status: String,
    /// Payment method label.
    pub payment_method: String,
    /// Payment provider reference.
    pub reference_id: String,
    /// Overall fulfillment status derived from the items.
    pub status: OrderStatus,
    /// Normalized line items.
    pub items: Vec<OrderItem>,
}

/// A normalized order line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product ordered.
    pub product_id: Option<ProductId>,
    /// Product display name.
    pub product_name: String,
    /// Unit price.
    pub price: f64,
    /// Quantity ordered.
    pub quantity: u32,
    /// Per-item fulfillment status.
    pub status: String,
}

impl Order {
    /// Normalize a raw backend order, dropping records without an id.
    pub fn from_raw(raw: RawOrder) -> Option<Self> {
        let id = raw.id.filter(|s| !s.is_empty()).map(OrderId::from)?;

        let items: Vec<OrderItem> = raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                let product = item.product.unwrap_or_default();
                OrderItem {
                    product_id: product.id,
                    product_name: product.product_name.unwrap_or_else(|| "Unknown".to_string()),
                    price: product.price.unwrap_or_default(),
                    quantity: item.quantity.unwrap_or_default(),
                    status: item.status.unwrap_or_else(|| "Pending".to_string()),
                }
            })
            .collect();

        let labels: Vec<&str> = items.iter().map(|i| i.status.as_str()).collect();
        let status = OrderStatus::from_item_labels(&labels);
        let quantity = items.iter().map(|i| i.quantity).sum();
        let payment = raw.payment.unwrap_or_default();

        Some(Self {
            id,
            customer_name: raw.customer_name.unwrap_or_else(|| "Unknown".to_string()),
            customer_email: raw.customer_email.unwrap_or_default(),
            customer_phone: raw.customer_phone.unwrap_or_default(),
            delivery_address: raw.delivery_address.unwrap_or_default(),
            ordered_at: raw.order_date.or(raw.created_at).unwrap_or_else(Utc::now),
            quantity,
            total: raw.total_order.unwrap_or_default(),
            payment_status: payment.status.unwrap_or_default(),
            payment_method: payment
                .method
                .or(raw.payment_method)
                .unwrap_or_default(),
            reference_id: payment.reference_id.unwrap_or_default(),
            status,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_normalization() {
        let raw: RawOrder = serde_json::from_str(
            r#"{
                "_id": "o1",
                "customerName": "Ben Cruz",
                "totalOrder": 3600.0,
                "payment": {"status": "Succeeded", "method": "GCash", "referenceId": "ref-9"},
                "items": [
                    {"product": {"_id": "p1", "productName": "Chain kit", "price": 1800.0}, "quantity": 2, "status": "To ship"}
                ],
                "createdAt": "2024-02-01T09:00:00Z"
            }"#,
        )
        .unwrap();

        let order = Order::from_raw(raw).expect("order should normalize");
        assert_eq!(order.id, OrderId::new("o1"));
        assert_eq!(order.quantity, 2);
        assert_eq!(order.status, OrderStatus::ToShip);
        assert_eq!(order.payment_method, "GCash");
    }

    #[test]
    fn test_order_without_id_is_dropped() {
        let raw: RawOrder = serde_json::from_str(r#"{"customerName": "x"}"#).unwrap();
        assert!(Order::from_raw(raw).is_none());
    }

    #[test]
    fn test_payment_method_falls_back_to_top_level() {
        let raw: RawOrder =
            serde_json::from_str(r#"{"_id": "o2", "paymentMethod": "Cash"}"#).unwrap();
        let order = Order::from_raw(raw).unwrap();
        assert_eq!(order.payment_method, "Cash");
    }
}
