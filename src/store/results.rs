//! In-memory result cache keyed by search term.
//!
//! The store only ever grows by appending pages and shrinks by dismissing
//! single hits. Entries are never evicted; they live as long as the plugin.

use std::collections::HashMap;

use crate::domain::Hit;
use crate::store::models::{ResultEntry, SearchKey};

static EMPTY_ENTRY: ResultEntry = ResultEntry::EMPTY;

/// Mapping from search term to accumulated hits and current page.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::Hit;
/// use hnsearch::store::ResultStore;
///
/// let mut store = ResultStore::new();
/// store.merge("rust", vec![Hit::new("a", "A")], 0);
/// store.merge("rust", vec![Hit::new("b", "B")], 1);
///
/// let entry = store.get("rust");
/// assert_eq!(entry.hits.len(), 2);
/// assert_eq!(entry.page, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    entries: HashMap<SearchKey, ResultEntry>,
}

impl ResultStore {
    /// Creates a store with no cached terms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `hits` to the entry for `key` and records `page` as its page.
    ///
    /// Creates the entry when absent, even for an empty batch, so a search
    /// that found nothing still counts as cached. Hits already stored keep
    /// their order and duplicates are kept as-is.
    ///
    /// # Parameters
    ///
    /// * `key` - Search term the request was issued for
    /// * `hits` - Hits of the fetched page, in API order
    /// * `page` - Page number the hits belong to
    ///
    /// # Tracing
    ///
    /// Runs inside a `store_merge` debug span with the key, batch size and page.
    pub fn merge(&mut self, key: &str, hits: Vec<Hit>, page: u32) {
        let _span = tracing::debug_span!("store_merge",
            key = %key,
            incoming = hits.len(),
            page = page
        ).entered();

        let entry = self.entries.entry(key.to_string()).or_default();
        entry.hits.extend(hits);
        entry.page = page;

        tracing::debug!(total_hits = entry.hits.len(), "hits merged");
    }

    /// Removes every hit with `object_id` from the entry for `key`.
    ///
    /// Unknown keys and ids are ignored, which makes the call idempotent. The
    /// entry's page is never changed.
    ///
    /// # Parameters
    ///
    /// * `key` - Search term whose entry is edited
    /// * `object_id` - Id of the hit to drop
    ///
    /// # Returns
    ///
    /// The number of hits removed, 0 when nothing matched.
    pub fn remove_hit(&mut self, key: &str, object_id: &str) -> usize {
        let Some(entry) = self.entries.get_mut(key) else {
            tracing::debug!(key = %key, "remove on unknown key ignored");
            return 0;
        };

        let before = entry.hits.len();
        entry.hits.retain(|hit| hit.object_id != object_id);
        let removed = before - entry.hits.len();

        tracing::debug!(key = %key, object_id = %object_id, removed = removed, "hit removed");
        removed
    }

    /// Returns the entry for `key`, or an empty entry at page 0.
    ///
    /// Never inserts; use [`ResultStore::contains`] to tell a missing key from
    /// a cached search with no hits.
    #[must_use]
    pub fn get(&self, key: &str) -> &ResultEntry {
        self.entries.get(key).unwrap_or(&EMPTY_ENTRY)
    }

    /// Whether a fetch for `key` has ever succeeded.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether no search has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(ids: &[&str]) -> Vec<Hit> {
        ids.iter().map(|id| Hit::new(*id, format!("title {id}"))).collect()
    }

    fn ids(store: &ResultStore, key: &str) -> Vec<String> {
        store.get(key).hits.iter().map(|h| h.object_id.clone()).collect()
    }

    #[test]
    fn merge_appends_in_order_and_replaces_page() {
        let mut store = ResultStore::new();
        store.merge("k", hits(&["a", "b"]), 0);
        store.merge("k", hits(&["c"]), 1);

        assert_eq!(ids(&store, "k"), vec!["a", "b", "c"]);
        assert_eq!(store.get("k").page, 1);
    }

    #[test]
    fn merge_keeps_duplicates() {
        let mut store = ResultStore::new();
        store.merge("k", hits(&["a"]), 0);
        store.merge("k", hits(&["a"]), 1);
        assert_eq!(ids(&store, "k"), vec!["a", "a"]);
    }

    #[test]
    fn merge_with_no_hits_still_creates_entry() {
        let mut store = ResultStore::new();
        store.merge("nothing", vec![], 0);
        assert!(store.contains("nothing"));
        assert!(store.get("nothing").hits.is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let mut store = ResultStore::new();
        store.merge("a", hits(&["1"]), 0);
        store.merge("b", hits(&["2"]), 3);
        assert_eq!(ids(&store, "a"), vec!["1"]);
        assert_eq!(store.get("a").page, 0);
        assert_eq!(store.get("b").page, 3);
        assert!(store.contains("a") && store.contains("b"));
    }

    #[test]
    fn get_unknown_key_returns_empty_sentinel() {
        let store = ResultStore::new();
        assert_eq!(store.get("never"), &ResultEntry::EMPTY);
        assert!(!store.contains("never"));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_hit_is_idempotent() {
        let mut store = ResultStore::new();
        store.merge("k", hits(&["y", "z"]), 0);

        assert_eq!(store.remove_hit("k", "y"), 1);
        let once = store.clone();
        assert_eq!(store.remove_hit("k", "y"), 0);

        assert_eq!(store, once);
        assert_eq!(ids(&store, "k"), vec!["z"]);
    }

    #[test]
    fn remove_hit_on_missing_key_or_id_is_noop() {
        let mut store = ResultStore::new();
        store.merge("k", hits(&["y"]), 2);

        assert_eq!(store.remove_hit("other", "y"), 0);
        assert_eq!(store.remove_hit("k", "nope"), 0);
        assert_eq!(ids(&store, "k"), vec!["y"]);
        assert_eq!(store.get("k").page, 2);
        assert!(!store.contains("other"));
    }
}
