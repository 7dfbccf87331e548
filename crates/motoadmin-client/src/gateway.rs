//! Trait seam between the reconciliation feed and the backend API.
//!
//! The feed only needs these four operations, so they sit behind a trait:
//! production wires in [`ApiClient`](crate::api::ApiClient), tests wire in
//! a stub and exercise the feed without HTTP.

use async_trait::async_trait;

use motoadmin_core::result::AppResult;
use motoadmin_core::types::id::{NotificationId, OrderId};
use motoadmin_entity::notification::{CancellationAction, RawNotification};

/// Backend operations the notification feed depends on.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch the operator's full current notification set.
    async fn list_notifications(&self) -> AppResult<Vec<RawNotification>>;

    /// Persist the read flag for a single notification.
    async fn mark_read(&self, id: &NotificationId) -> AppResult<()>;

    /// Persist the read flag for every notification.
    async fn mark_all_read(&self) -> AppResult<()>;

    /// Issue the operator's cancellation decision for an order. The state
    /// change is not returned here; it arrives later on the push channel.
    async fn resolve_cancellation(
        &self,
        order_id: &OrderId,
        action: CancellationAction,
    ) -> AppResult<()>;
}
