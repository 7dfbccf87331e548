//! Newtype wrappers around backend identifier strings.
//!
//! The backend issues opaque string identifiers (Mongo-style object ids).
//! Using distinct types prevents accidentally passing an `OrderId` where a
//! `NotificationId` is expected, which matters in the reconciliation layer
//! where both are valid match keys for the same event.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around an opaque backend string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from a backend-issued string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

define_id!(
    /// Unique identifier for an order.
    OrderId
);

define_id!(
    /// Unique identifier for a service appointment.
    AppointmentId
);

define_id!(
    /// Unique identifier for a catalog product.
    ProductId
);

define_id!(
    /// Unique identifier for a user account.
    UserId
);

impl NotificationId {
    /// Synthesize a locally-unique identifier for a push record that
    /// arrived without one. Prefixed so it can never collide with a
    /// backend-issued id.
    pub fn synthetic() -> Self {
        Self(format!("local-{}", Uuid::new_v4()))
    }

    /// Whether this identifier was synthesized locally rather than issued
    /// by the backend.
    pub fn is_synthetic(&self) -> bool {
        self.0.starts_with("local-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_id_display() {
        let id = NotificationId::new("68ab4f2e9d3c");
        assert_eq!(id.to_string(), "68ab4f2e9d3c");
    }

    #[test]
    fn test_synthetic_ids_are_unique() {
        let a = NotificationId::synthetic();
        let b = NotificationId::synthetic();
        assert_ne!(a, b);
        assert!(a.is_synthetic());
        assert!(!NotificationId::new("68ab4f2e9d3c").is_synthetic());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = OrderId::new("ord-1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"ord-1\"");
        let parsed: OrderId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
