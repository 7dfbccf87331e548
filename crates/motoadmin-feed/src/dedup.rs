//! Deduplication and ordering passes applied before every commit.

use std::collections::HashSet;

use motoadmin_entity::notification::Notification;

/// Collapse entries sharing a resolved id, keeping the first occurrence in
/// input order.
///
/// Input order is the policy lever: a caller that wants "newest version
/// wins" prepends the newest copy before calling this. The live update
/// path relies on that by prepending the replacement while the stale copy
/// is still in the list.
pub fn dedupe_first_wins(items: Vec<Notification>) -> Vec<Notification> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|n| seen.insert(n.id.clone()))
        .collect()
}

/// Stable sort by creation time, most recent first. Equal timestamps keep
/// their relative input order.
pub fn sort_newest_first(items: &mut [Notification]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use motoadmin_entity::notification::RawNotification;

    fn notif(id: &str, created_at: &str) -> Notification {
        let raw = RawNotification {
            primary_id: Some(id.to_string()),
            created_at: Some(created_at.parse().unwrap()),
            message: Some(format!("msg-{id}")),
            ..Default::default()
        };
        raw.normalize().unwrap()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let deduped = dedupe_first_wins(vec![
            notif("n1", "2024-01-02T00:00:00Z"),
            notif("n2", "2024-01-01T00:00:00Z"),
            notif("n1", "2024-01-03T00:00:00Z"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id.as_str(), "n1");
        assert_eq!(
            deduped[0].created_at,
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_sort_is_descending() {
        let mut items = vec![
            notif("old", "2024-01-01T00:00:00Z"),
            notif("new", "2024-03-01T00:00:00Z"),
            notif("mid", "2024-02-01T00:00:00Z"),
        ];
        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_ties_preserve_input_order() {
        let mut items = vec![
            notif("a", "2024-01-01T00:00:00Z"),
            notif("b", "2024-01-01T00:00:00Z"),
            notif("c", "2024-01-01T00:00:00Z"),
        ];
        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
