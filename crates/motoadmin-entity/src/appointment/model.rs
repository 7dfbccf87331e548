//! Service appointment models.
//!
//! The backend's appointment records mix naming conventions
//! (`customer_Name`, `service_Type`), so the raw struct pins each wire
//! name explicitly instead of relying on a rename-all rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use motoadmin_core::types::id::AppointmentId;

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the shop.
    Confirmed,
    /// Service completed.
    Completed,
    /// Cancelled by either side.
    Cancelled,
}

impl AppointmentStatus {
    /// Normalize a raw upstream status label. Unrecognized labels degrade
    /// to [`Pending`](Self::Pending) so one bad record never fails the
    /// whole list.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Confirmed" => Self::Confirmed,
            "Completed" => Self::Completed,
            "Cancelled" => Self::Cancelled,
            "Pending" => Self::Pending,
            other => {
                tracing::debug!("Unrecognized appointment status label '{}'", other);
                Self::Pending
            }
        }
    }
}

/// Payment status of an appointment's service charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Payment not yet made.
    #[default]
    Pending,
    /// Payment confirmed by the provider.
    Succeeded,
    /// Payment failed.
    Failed,
}

impl PaymentStatus {
    /// Normalize a raw upstream status label, degrading unrecognized
    /// labels to [`Pending`](Self::Pending).
    pub fn from_label(label: &str) -> Self {
        match label {
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            "Pending" => Self::Pending,
            other => {
                tracing::debug!("Unrecognized payment status label '{}'", other);
                Self::Pending
            }
        }
    }
}

/// An appointment record as the backend serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAppointment {
    /// Appointment identifier.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Customer display name.
    #[serde(rename = "customer_Name")]
    pub customer_name: Option<String>,
    /// Customer email address.
    #[serde(rename = "customerEmail")]
    pub customer_email: Option<String>,
    /// Customer phone number.
    #[serde(rename = "customerPhone")]
    pub customer_phone: Option<String>,
    /// Service requested, e.g. "Change oil".
    #[serde(rename = "service_Type")]
    pub service_type: Option<String>,
    /// Assigned mechanic.
    pub mechanic: Option<String>,
    /// Scheduled date, as the backend formats it.
    pub date: Option<String>,
    /// Scheduled time slot.
    pub time: Option<String>,
    /// Raw lifecycle status label; normalized through
    /// [`AppointmentStatus::from_label`].
    pub status: Option<String>,
    /// Service charge.
    #[serde(rename = "service_Charge")]
    pub service_charge: Option<f64>,
    /// Invoice number, when already issued.
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: Option<String>,
    /// Payment record.
    pub payment: Option<RawAppointmentPayment>,
    /// Record creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Record update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw payment details of an appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAppointmentPayment {
    /// Payment method label.
    pub method: Option<String>,
    /// Raw payment status label; normalized through
    /// [`PaymentStatus::from_label`].
    pub status: Option<String>,
    /// Payment provider reference.
    pub reference_id: Option<String>,
    /// When the charge was paid.
    pub paid_at: Option<DateTime<Utc>>,
}

/// A normalized appointment row for the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment identifier.
    pub id: AppointmentId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Service requested.
    pub service_type: String,
    /// Assigned mechanic.
    pub mechanic: String,
    /// Scheduled date.
    pub date: String,
    /// Scheduled time slot.
    pub time: String,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Service charge.
    pub service_charge: f64,
    /// Invoice number; generated from the id when the backend has not
    /// issued one yet.
    pub invoice_number: String,
    /// Payment method label.
    pub payment_method: String,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Payment provider reference.
    pub reference_id: String,
    /// When the charge was paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// Record creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Record update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Normalize a raw backend appointment, dropping records without an id.
    pub fn from_raw(raw: RawAppointment) -> Option<Self> {
        let id = raw.id.filter(|s| !s.is_empty()).map(AppointmentId::from)?;
        let payment = raw.payment.unwrap_or_default();
        let invoice_number = raw
            .invoice_number
            .unwrap_or_else(|| format!("INV-{id}"));

        Some(Self {
            customer_name: raw.customer_name.unwrap_or_default(),
            customer_email: raw.customer_email.unwrap_or_default(),
            customer_phone: raw.customer_phone.unwrap_or_default(),
            service_type: raw.service_type.unwrap_or_default(),
            mechanic: raw.mechanic.unwrap_or_default(),
            date: raw.date.unwrap_or_default(),
            time: raw.time.unwrap_or_default(),
            status: raw
                .status
                .as_deref()
                .map(AppointmentStatus::from_label)
                .unwrap_or_default(),
            service_charge: raw.service_charge.unwrap_or_default(),
            invoice_number,
            payment_method: payment.method.unwrap_or_else(|| "GCash".to_string()),
            payment_status: payment
                .status
                .as_deref()
                .map(PaymentStatus::from_label)
                .unwrap_or_default(),
            reference_id: payment.reference_id.unwrap_or_default(),
            paid_at: payment.paid_at,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            id,
        })
    }
}
