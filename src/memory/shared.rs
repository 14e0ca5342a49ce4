use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::types::{AccessType, PageNumber, Timestamp};
use crate::memory::error::PageTableError;
use crate::memory::page_table::{AccessOutcome, Eviction, PageTable};

/// Page table handle that can be driven from several threads
///
/// Every operation holds the table lock for its whole duration, so a
/// replacement is never observed half done.
#[derive(Clone)]
pub struct SharedPageTable {
    inner: Arc<Mutex<PageTable>>,
}

impl SharedPageTable {
    pub fn new(table: PageTable) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    pub fn access(
        &self,
        page: PageNumber,
        access: AccessType,
        timestamp: Timestamp,
    ) -> Result<AccessOutcome, PageTableError> {
        self.inner.lock().access(page, access, timestamp)
    }

    pub fn replace(
        &self,
        old: PageNumber,
        new: PageNumber,
        timestamp: Timestamp,
    ) -> Result<Eviction, PageTableError> {
        self.inner.lock().replace(old, new, timestamp)
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.inner.lock().contains(page)
    }

    /// Run `f` against a consistent view of the table
    pub fn with_table<R>(&self, f: impl FnOnce(&PageTable) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run several operations as one step
    pub fn with_table_mut<R>(&self, f: impl FnOnce(&mut PageTable) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
