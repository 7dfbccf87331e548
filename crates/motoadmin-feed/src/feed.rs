//! The notification feed: fetcher, live event receiver, read-state
//! operations, and the cancellation sub-flow, bound to one gateway and one
//! committed state.

use std::sync::Arc;

use motoadmin_client::gateway::NotificationGateway;
use motoadmin_core::error::AppError;
use motoadmin_core::result::AppResult;
use motoadmin_core::types::id::{NotificationId, OrderId};
use motoadmin_entity::notification::{
    CancellationAction, CancellationState, Notification, RawNotification,
};
use motoadmin_realtime::channel::{ChannelSignal, Subscription};
use motoadmin_realtime::event::NotificationEvent;

use crate::state::FeedState;

/// One view's notification feed.
///
/// Owns the committed notification list for its lifetime; nothing else
/// mutates it. Constructed without a gateway when no auth context exists,
/// in which case every backend-touching operation is a logged skip.
pub struct NotificationFeed {
    gateway: Option<Arc<dyn NotificationGateway>>,
    state: FeedState,
}

impl NotificationFeed {
    /// Create a feed. Pass `None` when there is no authenticated session.
    pub fn new(gateway: Option<Arc<dyn NotificationGateway>>) -> Self {
        Self {
            gateway,
            state: FeedState::new(),
        }
    }

    /// Whether this feed has an authenticated gateway.
    pub fn authenticated(&self) -> bool {
        self.gateway.is_some()
    }

    /// The committed list, newest first.
    pub fn notifications(&self) -> &[Notification] {
        self.state.notifications()
    }

    /// Derived unread count.
    pub fn unread_count(&self) -> usize {
        self.state.unread_count()
    }

    /// Fetch the full notification set and replace the committed list.
    ///
    /// A single attempt: on failure the last known-good list stays
    /// committed and the error is logged. Runs on activation and after
    /// every channel reconnect.
    pub async fn refresh(&mut self) {
        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("Skipping notification fetch: no auth context");
            return;
        };

        match gateway.list_notifications().await {
            Ok(raw) => {
                let items: Vec<Notification> =
                    raw.into_iter().filter_map(RawNotification::normalize).collect();
                tracing::debug!("Fetched {} notifications", items.len());
                self.state.replace_all(items);
            }
            Err(e) => {
                tracing::error!("Failed to fetch notifications: {}", e);
            }
        }
    }

    /// Fold one live push event into the committed list.
    pub fn apply_event(&mut self, event: NotificationEvent) {
        self.state.apply(event);
    }

    /// Mark one notification as read: optimistic local flip, then persist.
    ///
    /// A failed persist leaves the optimistic state applied; the next
    /// refresh reconciles with whatever the backend recorded.
    pub async fn mark_as_read(&mut self, id: &NotificationId) {
        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("Skipping mark-as-read: no auth context");
            return;
        };

        self.state.mark_read(Some(id), None);
        if let Err(e) = gateway.mark_read(id).await {
            tracing::error!("Failed to persist read state for {}: {}", id, e);
        }
    }

    /// Mark every notification as read: optimistic local flip, then persist.
    pub async fn mark_all_as_read(&mut self) {
        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("Skipping mark-all-as-read: no auth context");
            return;
        };

        self.state.mark_all_read();
        if let Err(e) = gateway.mark_all_read().await {
            tracing::error!("Failed to persist mark-all-read: {}", e);
        }
    }

    /// Issue the operator's decision on a pending cancellation request.
    ///
    /// Validates that the order actually has a request awaiting a decision,
    /// then issues the backend command. Deliberately no local state change:
    /// the visible transition arrives as a push `update` event, because the
    /// backend owns the cancellation outcome.
    pub async fn act_on_cancellation(
        &mut self,
        order_id: &OrderId,
        action: CancellationAction,
    ) -> AppResult<()> {
        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("Skipping cancellation {}: no auth context", action);
            return Ok(());
        };

        let current = self
            .state
            .notifications()
            .iter()
            .filter(|n| n.order_id.as_ref() == Some(order_id))
            .map(|n| CancellationState::from_kind(n.kind))
            .find(|s| *s != CancellationState::Idle)
            .ok_or_else(|| {
                AppError::not_found(format!("No cancellation request for order {order_id}"))
            })?;
        current.decide(action)?;

        gateway.resolve_cancellation(order_id, action).await
    }

    /// Drive the feed from a subscription: initial fetch, then fold events
    /// in delivery order, refetching after every reconnect. Returns when
    /// the channel closes.
    pub async fn run(&mut self, mut subscription: Subscription) {
        self.refresh().await;

        while let Some(signal) = subscription.next().await {
            match signal {
                ChannelSignal::Event(event) => self.apply_event(event),
                ChannelSignal::Reconnected => self.refresh().await,
            }
        }

        tracing::info!("Push channel closed, feed loop ending");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway stub recording calls, optionally failing everything.
    struct StubGateway {
        fetch_result: Mutex<Option<AppResult<Vec<RawNotification>>>>,
        fail_writes: bool,
        calls: Mutex<Vec<String>>,
    }

    impl StubGateway {
        fn new() -> Self {
            Self {
                fetch_result: Mutex::new(None),
                fail_writes: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_fetch(raw: Vec<RawNotification>) -> Self {
            let stub = Self::new();
            *stub.fetch_result.lock().unwrap() = Some(Ok(raw));
            stub
        }

        fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }

        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }
    }

    #[async_trait]
    impl NotificationGateway for StubGateway {
        async fn list_notifications(&self) -> AppResult<Vec<RawNotification>> {
            self.record("list");
            self.fetch_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(AppError::network("stub: no fetch scripted")))
        }

        async fn mark_read(&self, id: &NotificationId) -> AppResult<()> {
            self.record(&format!("mark_read:{id}"));
            if self.fail_writes {
                return Err(AppError::network("stub: write failed"));
            }
            Ok(())
        }

        async fn mark_all_read(&self) -> AppResult<()> {
            self.record("mark_all_read");
            if self.fail_writes {
                return Err(AppError::network("stub: write failed"));
            }
            Ok(())
        }

        async fn resolve_cancellation(
            &self,
            order_id: &OrderId,
            action: CancellationAction,
        ) -> AppResult<()> {
            self.record(&format!("cancel:{order_id}:{action}"));
            if self.fail_writes {
                return Err(AppError::network("stub: write failed"));
            }
            Ok(())
        }
    }

    fn raw(id: &str, created_at: &str) -> RawNotification {
        RawNotification {
            primary_id: Some(id.to_string()),
            created_at: Some(created_at.parse().unwrap()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_scenario_counts_and_order() {
        let mut read_a = raw("a", "2024-01-01T00:00:00Z");
        read_a.read_at = None;
        let mut read_b = raw("b", "2024-01-02T00:00:00Z");
        read_b.read_at = Some("2024-01-02T01:00:00Z".parse().unwrap());

        let gateway = Arc::new(StubGateway::with_fetch(vec![read_a, read_b]));
        let mut feed = NotificationFeed::new(Some(gateway));
        feed.refresh().await;

        assert_eq!(feed.unread_count(), 1);
        let ids: Vec<&str> = feed.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_state_untouched() {
        let gateway = Arc::new(StubGateway::with_fetch(vec![raw(
            "n1",
            "2024-01-01T00:00:00Z",
        )]));
        let mut feed = NotificationFeed::new(Some(gateway));
        feed.refresh().await;
        assert_eq!(feed.notifications().len(), 1);

        // Second refresh has no scripted fetch and fails.
        feed.refresh().await;
        assert_eq!(feed.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_as_read_applies_regardless_of_backend_failure() {
        let gateway = Arc::new(StubGateway::failing_writes());
        let mut feed = NotificationFeed::new(Some(gateway.clone()));
        feed.apply_event(NotificationEvent::Created(raw("a", "2024-01-01T00:00:00Z")));
        feed.apply_event(NotificationEvent::Created(raw("b", "2024-01-02T00:00:00Z")));
        assert_eq!(feed.unread_count(), 2);

        feed.mark_all_as_read().await;

        assert_eq!(feed.unread_count(), 0);
        assert!(feed.notifications().iter().all(|n| n.read));
        assert!(gateway.calls.lock().unwrap().contains(&"mark_all_read".to_string()));
    }

    #[tokio::test]
    async fn test_operations_without_auth_are_silent_skips() {
        let mut feed = NotificationFeed::new(None);
        feed.refresh().await;
        feed.mark_as_read(&NotificationId::new("n1")).await;
        feed.mark_all_as_read().await;
        let result = feed
            .act_on_cancellation(&OrderId::new("o1"), CancellationAction::Accept)
            .await;
        assert!(result.is_ok());
        assert!(feed.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_issues_command_without_local_transition() {
        let gateway = Arc::new(StubGateway::new());
        let mut feed = NotificationFeed::new(Some(gateway.clone()));

        let mut requested = raw("n1", "2024-01-01T00:00:00Z");
        requested.kind = Some("CancellationRequest".to_string());
        requested.order_id = Some(OrderId::new("o1"));
        feed.apply_event(NotificationEvent::Created(requested));

        feed.act_on_cancellation(&OrderId::new("o1"), CancellationAction::Accept)
            .await
            .unwrap();

        // Command issued, but the entry's kind is unchanged until the push
        // channel delivers the backend's transition.
        assert!(
            gateway
                .calls
                .lock()
                .unwrap()
                .contains(&"cancel:o1:accept".to_string())
        );
        assert_eq!(
            CancellationState::from_kind(feed.notifications()[0].kind),
            CancellationState::Requested
        );
    }

    #[tokio::test]
    async fn test_cancellation_rejected_when_no_request_exists() {
        let gateway = Arc::new(StubGateway::new());
        let mut feed = NotificationFeed::new(Some(gateway));
        feed.apply_event(NotificationEvent::Created(raw("n1", "2024-01-01T00:00:00Z")));

        let result = feed
            .act_on_cancellation(&OrderId::new("o1"), CancellationAction::Reject)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cancellation_already_resolved_is_invalid() {
        let gateway = Arc::new(StubGateway::new());
        let mut feed = NotificationFeed::new(Some(gateway));

        let mut accepted = raw("n1", "2024-01-01T00:00:00Z");
        accepted.kind = Some("CancellationAccepted".to_string());
        accepted.order_id = Some(OrderId::new("o1"));
        feed.apply_event(NotificationEvent::Created(accepted));

        let result = feed
            .act_on_cancellation(&OrderId::new("o1"), CancellationAction::Accept)
            .await;
        assert!(result.is_err());
    }
}
