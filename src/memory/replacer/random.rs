use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::types::{PageNumber, Timestamp};
use super::{EvictionPolicy, PolicyKind};

/// Random replacement: the victim is drawn uniformly from the resident pages.
#[derive(Debug)]
pub struct RandomReplacer {
    pages: Vec<PageNumber>,
    // page -> index in `pages`
    positions: HashMap<PageNumber, usize>,
    rng: StdRng,
}

impl RandomReplacer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible victim sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            pages: Vec::new(),
            positions: HashMap::new(),
            rng,
        }
    }

    fn remove_at(&mut self, index: usize) -> PageNumber {
        let page = self.pages.swap_remove(index);
        self.positions.remove(&page);
        if let Some(&moved) = self.pages.get(index) {
            self.positions.insert(moved, index);
        }
        page
    }
}

impl Default for RandomReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl EvictionPolicy for RandomReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Random
    }

    fn notify_insert(&mut self, page: PageNumber, _timestamp: Timestamp) {
        if self.positions.contains_key(&page) {
            return;
        }
        self.positions.insert(page, self.pages.len());
        self.pages.push(page);
    }

    fn notify_remove(&mut self, page: PageNumber) {
        if let Some(&index) = self.positions.get(&page) {
            self.remove_at(index);
        }
    }

    fn select_victim(&mut self) -> Option<PageNumber> {
        if self.pages.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.pages.len());
        Some(self.remove_at(index))
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    fn clear(&mut self) {
        self.pages.clear();
        self.positions.clear();
    }
}
