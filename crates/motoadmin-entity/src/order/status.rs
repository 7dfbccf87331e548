//! Overall order status derivation.

use serde::{Deserialize, Serialize};

/// Overall fulfillment status of an order, derived from its item statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// No item has progressed yet.
    Pending,
    /// At least one item awaits operator approval.
    ForApproval,
    /// At least one item is queued for shipping.
    ToShip,
    /// At least one item is in transit.
    Shipped,
    /// At least one item was delivered.
    Delivered,
    /// Every item is completed.
    Completed,
}

impl OrderStatus {
    /// Derive the overall status from raw per-item status labels.
    ///
    /// The backend tracks status per line item; the console surfaces the
    /// least-advanced stage still in flight, checked in priority order.
    pub fn from_item_labels(labels: &[&str]) -> Self {
        if labels.is_empty() {
            return Self::Pending;
        }
        if labels.contains(&"For Approval") {
            return Self::ForApproval;
        }
        if labels.contains(&"To ship") {
            return Self::ToShip;
        }
        if labels.contains(&"Ship") {
            return Self::Shipped;
        }
        if labels.contains(&"Delivered") {
            return Self::Delivered;
        }
        if labels.iter().all(|l| *l == "Completed") {
            return Self::Completed;
        }
        Self::Pending
    }

    /// Return the status as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::ForApproval => "For Approval",
            Self::ToShip => "To ship",
            Self::Shipped => "Ship",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items_are_pending() {
        assert_eq!(OrderStatus::from_item_labels(&[]), OrderStatus::Pending);
    }

    #[test]
    fn test_for_approval_outranks_everything() {
        assert_eq!(
            OrderStatus::from_item_labels(&["Completed", "For Approval", "Delivered"]),
            OrderStatus::ForApproval
        );
    }

    #[test]
    fn test_all_completed() {
        assert_eq!(
            OrderStatus::from_item_labels(&["Completed", "Completed"]),
            OrderStatus::Completed
        );
    }

    #[test]
    fn test_mixed_completed_and_pending_stays_pending() {
        assert_eq!(
            OrderStatus::from_item_labels(&["Completed", "Pending"]),
            OrderStatus::Pending
        );
    }

    #[test]
    fn test_delivered_beats_completed_mix() {
        assert_eq!(
            OrderStatus::from_item_labels(&["Delivered", "Completed"]),
            OrderStatus::Delivered
        );
    }
}
