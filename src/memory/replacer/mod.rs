mod fifo;
mod lru;
mod random;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::types::{PageNumber, Timestamp};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;

/// Page replacement policy driven by the page table
///
/// The page table reports every insert, hit and removal; the policy keeps
/// whatever ordering it needs over the resident pages and names a victim on demand.
pub trait EvictionPolicy: Send {
    fn kind(&self) -> PolicyKind;

    /// A page became resident
    fn notify_insert(&mut self, page: PageNumber, timestamp: Timestamp);

    /// A resident page was referenced again
    fn notify_access(&mut self, _page: PageNumber, _timestamp: Timestamp) {}

    /// A page left memory; it must never be selected again
    fn notify_remove(&mut self, page: PageNumber);

    /// Pick a victim and stop tracking it. `None` when nothing is tracked.
    fn select_victim(&mut self) -> Option<PageNumber>;

    /// Number of pages currently tracked
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every tracked page
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Fifo,
    Lru,
    Random,
}

impl PolicyKind {
    /// Every policy, in the order the simulator runs them
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Random];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Random => "Random",
        }
    }

    /// Create an empty policy of this kind. The seed only matters for `Random`.
    pub fn build(self, seed: Option<u64>) -> Box<dyn EvictionPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new()),
            PolicyKind::Lru => Box::new(LruReplacer::new()),
            PolicyKind::Random => match seed {
                Some(seed) => Box::new(RandomReplacer::with_seed(seed)),
                None => Box::new(RandomReplacer::new()),
            },
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_kind() {
        for kind in PolicyKind::ALL {
            let policy = kind.build(Some(1));
            assert_eq!(policy.kind(), kind);
            assert!(policy.is_empty());
        }
    }

    #[test]
    fn test_same_contract_for_every_policy() {
        for kind in PolicyKind::ALL {
            let mut policy = kind.build(Some(9));
            policy.notify_insert(4, 0);
            policy.notify_insert(5, 1);
            policy.notify_access(4, 2);
            policy.notify_remove(4);
            assert_eq!(policy.len(), 1, "{} kept a removed page", kind);
            assert_eq!(policy.select_victim(), Some(5));
            assert_eq!(policy.select_victim(), None);
        }
    }

    #[test]
    fn test_clear_forgets_pages() {
        for kind in PolicyKind::ALL {
            let mut policy = kind.build(None);
            policy.notify_insert(1, 0);
            policy.notify_insert(2, 1);
            policy.clear();
            assert!(policy.is_empty());
            assert_eq!(policy.select_victim(), None);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PolicyKind::Fifo.to_string(), "FIFO");
        assert_eq!(PolicyKind::Lru.to_string(), "LRU");
        assert_eq!(PolicyKind::Random.to_string(), "Random");
    }
}
