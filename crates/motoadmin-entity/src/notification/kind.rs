//! Notification kind enumeration and upstream label normalization.

use serde::{Deserialize, Serialize};

/// Kind of a notification after normalization.
///
/// The backend emits a wider set of raw labels than the console cares to
/// distinguish; [`NotificationKind::from_label`] folds them into this
/// closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// A new or updated parts order.
    Order,
    /// A service appointment event.
    Appointment,
    /// A customer asked to cancel an order.
    CancellationRequested,
    /// An operator accepted the cancellation.
    CancellationAccepted,
    /// An operator rejected the cancellation.
    CancellationRejected,
}

impl NotificationKind {
    /// Normalize a raw upstream kind label.
    ///
    /// The two admin-facing appointment labels both collapse to
    /// [`Appointment`](Self::Appointment). Unrecognized labels fall back to
    /// [`Order`](Self::Order) so a new backend label degrades to a generic
    /// entry instead of being dropped.
    pub fn from_label(label: &str) -> Self {
        match label {
            "order" => Self::Order,
            "appointment" | "AppointmentCreatedAdmin" | "AppointmentStatusAdmin" => {
                Self::Appointment
            }
            "CancellationRequest" => Self::CancellationRequested,
            "CancellationAccepted" => Self::CancellationAccepted,
            "CancellationRejected" => Self::CancellationRejected,
            other => {
                tracing::debug!("Unrecognized notification kind label '{}'", other);
                Self::Order
            }
        }
    }

    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Appointment => "appointment",
            Self::CancellationRequested => "cancellation-requested",
            Self::CancellationAccepted => "cancellation-accepted",
            Self::CancellationRejected => "cancellation-rejected",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
