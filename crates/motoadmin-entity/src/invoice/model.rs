//! Invoice model and the mappings from business objects to invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, PaymentStatus};
use crate::order::Order;

/// Settlement status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Fully paid.
    Paid,
    /// Not yet paid.
    Unpaid,
}

/// A printable invoice assembled from a business object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number.
    pub invoice_number: String,
    /// What kind of business object this invoice was issued for.
    pub source_type: String,
    /// Identifier of the source object.
    pub source_id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Payment method label.
    pub payment_method: String,
    /// Payment provider reference.
    pub reference_id: String,
    /// When the invoice was paid, if it was.
    pub paid_at: Option<DateTime<Utc>>,
    /// Invoice lines.
    pub items: Vec<InvoiceLine>,
    /// Sum of line totals.
    pub subtotal: f64,
    /// Amount due.
    pub total: f64,
    /// Settlement status.
    pub status: InvoiceStatus,
}

/// A single invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Line description.
    pub description: String,
    /// Quantity billed.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: f64,
    /// Line total.
    pub line_total: f64,
}

impl From<&Appointment> for Invoice {
    /// Build a single-line invoice for an appointment's service charge.
    fn from(appointment: &Appointment) -> Self {
        let status = if appointment.payment_status == PaymentStatus::Succeeded {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Unpaid
        };

        Self {
            invoice_number: appointment.invoice_number.clone(),
            source_type: "Appointment".to_string(),
            source_id: appointment.id.to_string(),
            customer_name: appointment.customer_name.clone(),
            customer_email: appointment.customer_email.clone(),
            customer_phone: appointment.customer_phone.clone(),
            payment_method: appointment.payment_method.clone(),
            reference_id: appointment.reference_id.clone(),
            paid_at: appointment.paid_at,
            items: vec![InvoiceLine {
                description: appointment.service_type.clone(),
                quantity: 1,
                unit_price: appointment.service_charge,
                line_total: appointment.service_charge,
            }],
            subtotal: appointment.service_charge,
            total: appointment.service_charge,
            status,
        }
    }
}

impl From<&Order> for Invoice {
    /// Build an invoice with one line per ordered item.
    fn from(order: &Order) -> Self {
        let status = if order.payment_status == "Succeeded" {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Unpaid
        };

        let items: Vec<InvoiceLine> = order
            .items
            .iter()
            .map(|item| InvoiceLine {
                description: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                line_total: item.price * f64::from(item.quantity),
            })
            .collect();
        let subtotal = items.iter().map(|line| line.line_total).sum();

        Self {
            invoice_number: format!("INV-{}", order.id),
            source_type: "Order".to_string(),
            source_id: order.id.to_string(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            payment_method: order.payment_method.clone(),
            reference_id: order.reference_id.clone(),
            paid_at: None,
            items,
            subtotal,
            total: order.total,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::RawAppointment;

    #[test]
    fn test_paid_appointment_maps_to_paid_invoice() {
        let raw: RawAppointment = serde_json::from_str(
            r#"{
                "_id": "a1",
                "customer_Name": "Liza Moreno",
                "service_Type": "Tune-up",
                "service_Charge": 850.0,
                "payment": {"status": "Succeeded"}
            }"#,
        )
        .unwrap();
        let appointment = Appointment::from_raw(raw).unwrap();

        let invoice = Invoice::from(&appointment);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].description, "Tune-up");
        assert_eq!(invoice.total, 850.0);
        assert_eq!(invoice.invoice_number, "INV-a1");
    }

    #[test]
    fn test_order_maps_to_invoice_with_per_item_lines() {
        let raw: crate::order::RawOrder = serde_json::from_str(
            r#"{
                "_id": "o1",
                "customerName": "Ben Cruz",
                "totalOrder": 3700.0,
                "payment": {"status": "Succeeded", "method": "GCash", "referenceId": "ref-9"},
                "items": [
                    {"product": {"productName": "Chain kit", "price": 1800.0}, "quantity": 2, "status": "Completed"},
                    {"product": {"productName": "Oil filter", "price": 100.0}, "quantity": 1, "status": "Completed"}
                ]
            }"#,
        )
        .unwrap();
        let order = Order::from_raw(raw).unwrap();

        let invoice = Invoice::from(&order);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.source_type, "Order");
        assert_eq!(invoice.invoice_number, "INV-o1");
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].line_total, 3600.0);
        assert_eq!(invoice.subtotal, 3700.0);
        assert_eq!(invoice.total, 3700.0);
    }

    #[test]
    fn test_pending_payment_maps_to_unpaid() {
        let raw: RawAppointment = serde_json::from_str(
            r#"{"_id": "a2", "service_Type": "Change oil", "service_Charge": 300.0}"#,
        )
        .unwrap();
        let appointment = Appointment::from_raw(raw).unwrap();
        assert_eq!(Invoice::from(&appointment).status, InvoiceStatus::Unpaid);
    }
}
