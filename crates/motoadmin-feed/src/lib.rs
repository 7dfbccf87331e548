//! # motoadmin-feed
//!
//! The notification reconciliation layer. A [`NotificationFeed`] owns the
//! in-memory notification list for one subscribing view: the fetcher
//! populates it, live push events mutate it, and every mutation re-runs
//! deduplication and sorting before the state is committed. Unread counts
//! are derived from the committed list, never stored.

pub mod dedup;
pub mod feed;
pub mod state;

pub use feed::NotificationFeed;
pub use state::FeedState;
