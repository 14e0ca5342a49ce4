use linked_hash_map::LinkedHashMap;

use crate::common::types::{PageNumber, Timestamp};
use super::{EvictionPolicy, PolicyKind};

/// Least-recently-used replacement
///
/// Pages are kept in recency order with the most recently used page at the back,
/// each page holding exactly one position together with its last access time.
#[derive(Debug, Default)]
pub struct LruReplacer {
    recency: LinkedHashMap<PageNumber, Timestamp>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn peek_victim(&self) -> Option<PageNumber> {
        self.recency.front().map(|(&page, _)| page)
    }
}

impl EvictionPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn notify_insert(&mut self, page: PageNumber, timestamp: Timestamp) {
        // Re-inserting an existing key moves it to the back
        self.recency.insert(page, timestamp);
    }

    fn notify_access(&mut self, page: PageNumber, timestamp: Timestamp) {
        if let Some(last_access) = self.recency.get_refresh(&page) {
            *last_access = timestamp;
        }
    }

    fn notify_remove(&mut self, page: PageNumber) {
        self.recency.remove(&page);
    }

    fn select_victim(&mut self) -> Option<PageNumber> {
        self.recency.pop_front().map(|(page, _)| page)
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }
}
