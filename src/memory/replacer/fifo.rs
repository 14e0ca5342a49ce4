use std::collections::VecDeque;

use crate::common::types::{PageNumber, Timestamp};
use super::{EvictionPolicy, PolicyKind};

/// First-in-first-out replacement: pages leave in the order they arrived.
/// Hits do not reorder anything.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    arrivals: VecDeque<PageNumber>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EvictionPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn notify_insert(&mut self, page: PageNumber, _timestamp: Timestamp) {
        self.arrivals.push_back(page);
    }

    fn notify_remove(&mut self, page: PageNumber) {
        if let Some(pos) = self.arrivals.iter().position(|&p| p == page) {
            self.arrivals.remove(pos);
        }
    }

    fn select_victim(&mut self) -> Option<PageNumber> {
        self.arrivals.pop_front()
    }

    fn len(&self) -> usize {
        self.arrivals.len()
    }

    fn clear(&mut self) {
        self.arrivals.clear();
    }
}
