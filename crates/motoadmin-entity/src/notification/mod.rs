//! Notification domain entities.

pub mod cancellation;
pub mod kind;
pub mod model;
pub mod raw;

pub use cancellation::{CancellationAction, CancellationState};
pub use kind::NotificationKind;
pub use model::{LineItem, Notification, NotificationPayload, PaymentDetails};
pub use raw::RawNotification;
