//! Pure reconciliation state: the committed notification list.
//!
//! Every mutation path funnels through [`FeedState::commit`], which re-runs
//! deduplication then sorting, so the committed list always holds at most
//! one entry per resolved id, ordered by creation time descending.

use motoadmin_core::types::id::{NotificationId, OrderId};
use motoadmin_entity::notification::Notification;
use motoadmin_realtime::event::{NotificationEvent, NotificationUpdate};

use crate::dedup::{dedupe_first_wins, sort_newest_first};

/// The committed notification list for one subscribing view.
#[derive(Debug, Default)]
pub struct FeedState {
    items: Vec<Notification>,
}

impl FeedState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed list, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derived unread count. Counted from the list on every call so it can
    /// never drift from the entries themselves.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.is_unread()).count()
    }

    /// Replace the whole list, as the fetcher does after a bulk load.
    pub fn replace_all(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.commit();
    }

    /// Add a new entry. A `create` carrying an already-known id loses to
    /// the existing copy (first occurrence wins); only the update path
    /// replaces an entry, via [`upsert`](Self::upsert).
    pub fn insert(&mut self, notification: Notification) {
        self.items.push(notification);
        self.commit();
    }

    /// Set `read` on every entry matching the event keys. Returns how many
    /// entries matched.
    pub fn mark_read(
        &mut self,
        id: Option<&NotificationId>,
        order_id: Option<&OrderId>,
    ) -> usize {
        let mut matched = 0;
        for n in &mut self.items {
            if n.matches(id, order_id) {
                n.read = true;
                matched += 1;
            }
        }
        self.commit();
        matched
    }

    /// Set `read` on every entry.
    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
        self.commit();
    }

    /// Remove every entry matching the event keys. Returns how many were
    /// removed.
    pub fn remove(&mut self, id: Option<&NotificationId>, order_id: Option<&OrderId>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.matches(id, order_id));
        self.commit();
        before - self.items.len()
    }

    /// Replace any entry with the same resolved id by the given one
    /// (remove-then-prepend, so the replacement wins the dedup pass).
    pub fn upsert(&mut self, notification: Notification) {
        self.items.retain(|n| n.id != notification.id);
        self.items.insert(0, notification);
        self.commit();
    }

    /// Fold one live push event into the state.
    pub fn apply(&mut self, event: NotificationEvent) {
        match event {
            NotificationEvent::Created(raw) => {
                self.insert(raw.normalize_or_synthesize());
            }
            NotificationEvent::Updated(NotificationUpdate::MarkRead { id, order_id }) => {
                self.mark_read(id.as_ref(), order_id.as_ref());
            }
            NotificationEvent::Updated(NotificationUpdate::Delete { id, order_id }) => {
                self.remove(id.as_ref(), order_id.as_ref());
            }
            NotificationEvent::Updated(NotificationUpdate::Update { notification }) => {
                self.upsert(notification.normalize_or_synthesize());
            }
        }
    }

    fn commit(&mut self) {
        let items = std::mem::take(&mut self.items);
        let mut items = dedupe_first_wins(items);
        sort_newest_first(&mut items);
        self.items = items;
    }
}
