use log::{debug, error, trace, warn};

use crate::common::types::{AccessType, FrameNumber, PageNumber, Timestamp};
use crate::memory::entry::PageEntry;
use crate::memory::error::PageTableError;
use crate::memory::frame_allocator::FrameAllocator;
use crate::memory::replacer::{EvictionPolicy, PolicyKind};

/// A page that was pushed out of memory to make room for another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    pub page: PageNumber,
    pub frame: FrameNumber,
    pub dirty: bool,
}

impl Eviction {
    /// An evicted dirty page has to be written back
    pub fn is_flush(&self) -> bool {
        self.dirty
    }
}

/// What a single memory reference did to the page table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident
    Hit,
    /// Page fault served from a free frame
    Loaded { frame: FrameNumber },
    /// Page fault served by evicting another page
    Replaced(Eviction),
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        !matches!(self, AccessOutcome::Hit)
    }

    pub fn eviction(&self) -> Option<&Eviction> {
        match self {
            AccessOutcome::Replaced(eviction) => Some(eviction),
            _ => None,
        }
    }
}

/// Page table of a single flat virtual address space
///
/// One slot per logical page. A slot holds an entry only while the page is
/// resident, and every resident page owns exactly one frame from the allocator.
pub struct PageTable {
    page_size: u64,
    virtual_memory_size: u64,
    table_size: usize,
    entries: Vec<Option<PageEntry>>,
    resident_count: usize,
    frames: FrameAllocator,
    policy: Box<dyn EvictionPolicy>,
}

impl PageTable {
    pub fn new(
        page_size: u64,
        virtual_memory_size: u64,
        frame_count: usize,
        policy: PolicyKind,
    ) -> Self {
        Self::with_policy(page_size, virtual_memory_size, frame_count, policy.build(None))
    }

    /// Create a table driven by an already constructed policy
    pub fn with_policy(
        page_size: u64,
        virtual_memory_size: u64,
        frame_count: usize,
        policy: Box<dyn EvictionPolicy>,
    ) -> Self {
        let mut table = Self {
            page_size: 0,
            virtual_memory_size: 0,
            table_size: 0,
            entries: Vec::new(),
            resident_count: 0,
            frames: FrameAllocator::new(frame_count),
            policy,
        };
        table.reset(page_size, virtual_memory_size, frame_count);
        table
    }

    /// Drop every resident page and start over with the given geometry
    pub fn reset(&mut self, page_size: u64, virtual_memory_size: u64, frame_count: usize) {
        assert!(page_size > 0, "page size must be non-zero");

        self.page_size = page_size;
        self.virtual_memory_size = virtual_memory_size;
        self.table_size = (virtual_memory_size / page_size) as usize;
        self.entries.clear();
        self.entries.resize(self.table_size, None);
        self.resident_count = 0;
        self.frames.reset(frame_count);
        self.policy.clear();

        debug!(
            "Page table reset: {} pages of {} bytes, {} frames, {} replacement",
            self.table_size, page_size, frame_count, self.policy.kind()
        );
    }

    /// Swap in a different replacement policy. Only allowed while nothing is resident.
    pub fn set_policy(&mut self, policy: Box<dyn EvictionPolicy>) {
        assert_eq!(
            self.resident_count, 0,
            "cannot change replacement policy with {} resident pages",
            self.resident_count
        );
        self.policy = policy;
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Take a free frame, or `None` when physical memory is full
    pub fn acquire_frame(&mut self) -> Option<FrameNumber> {
        self.frames.acquire()
    }

    /// True if the page is resident. Out of range pages are never resident.
    pub fn contains(&self, page: PageNumber) -> bool {
        self.entry_at(page).is_some_and(PageEntry::is_valid)
    }

    /// Every logical page is resident
    pub fn is_full(&self) -> bool {
        self.resident_count >= self.table_size
    }

    /// No free frame is left
    pub fn memory_is_full(&self) -> bool {
        self.frames.is_full()
    }

    /// Make `page` resident in `frame`
    ///
    /// `frame` must come from `acquire_frame` and the slot must be empty.
    pub fn insert(&mut self, page: PageNumber, timestamp: Timestamp, frame: FrameNumber) {
        assert!(
            page < self.table_size,
            "page {} outside table of {} pages",
            page,
            self.table_size
        );
        assert!(
            self.entries[page].is_none(),
            "insert into occupied slot for page {}",
            page
        );
        if frame >= self.frames.total_frames() {
            error!(
                "Frame {} for page {} was not handed out by the allocator ({} frames)",
                frame,
                page,
                self.frames.total_frames()
            );
        }
        assert!(frame < self.frames.total_frames(), "frame {} outside the frame pool", frame);

        self.entries[page] = Some(PageEntry::new(page, frame, timestamp));
        self.policy.notify_insert(page, timestamp);
        self.resident_count += 1;
        trace!("Page {} loaded into frame {}", page, frame);
    }

    /// Evict a resident page, returning its entry and freeing its frame
    pub fn remove(&mut self, page: PageNumber) -> PageEntry {
        let Some(entry) = self.entries.get_mut(page).and_then(Option::take) else {
            panic!("remove of page {} which is not resident", page);
        };

        self.frames.release(entry.frame_number());
        self.policy.notify_remove(page);
        self.resident_count -= 1;
        trace!("Page {} removed from frame {}", page, entry.frame_number());
        entry
    }

    /// Evict `old` and load `new` into the freed frame as one step
    pub fn replace(
        &mut self,
        old: PageNumber,
        new: PageNumber,
        timestamp: Timestamp,
    ) -> Result<Eviction, PageTableError> {
        self.check_range(new)?;

        let evicted = self.remove(old);
        let frame = self.frames.acquire().ok_or(PageTableError::CapacityExhausted)?;
        self.insert(new, timestamp, frame);

        debug!(
            "Replaced page {} with page {} in frame {}{}",
            old,
            new,
            frame,
            if evicted.is_dirty() { " (flush)" } else { "" }
        );

        Ok(Eviction {
            page: old,
            frame: evicted.frame_number(),
            dirty: evicted.is_dirty(),
        })
    }

    /// Ask the replacement policy for the next victim
    ///
    /// Panics when memory is reported full but the policy tracks no page.
    pub fn select_victim(&mut self) -> PageNumber {
        match self.policy.select_victim() {
            Some(page) => page,
            None => panic!(
                "{} policy has no victim with {} resident pages and {} free frames",
                self.policy.kind(),
                self.resident_count,
                self.frames.free_count()
            ),
        }
    }

    pub fn mark_dirty(&mut self, page: PageNumber) {
        match self.entries.get_mut(page).and_then(Option::as_mut) {
            Some(entry) => entry.mark_dirty(),
            None => warn!("Ignoring write to page {} which is not resident", page),
        }
    }

    /// Report a hit to the replacement policy
    pub fn access_notify(&mut self, page: PageNumber, timestamp: Timestamp) {
        if let Some(entry) = self.entries.get_mut(page).and_then(Option::as_mut) {
            entry.touch(timestamp);
        }
        self.policy.notify_access(page, timestamp);
    }

    /// Process one memory reference to `page`
    ///
    /// Hits mark the page dirty on writes and refresh the policy; faults load
    /// the page into a free frame, or replace a victim when none is left.
    pub fn access(
        &mut self,
        page: PageNumber,
        access: AccessType,
        timestamp: Timestamp,
    ) -> Result<AccessOutcome, PageTableError> {
        self.check_range(page)?;

        if self.contains(page) {
            if access.is_write() {
                self.mark_dirty(page);
            }
            self.access_notify(page, timestamp);
            trace!("Hit on page {}", page);
            return Ok(AccessOutcome::Hit);
        }

        let outcome = match self.frames.acquire() {
            Some(frame) => {
                self.insert(page, timestamp, frame);
                AccessOutcome::Loaded { frame }
            }
            None => {
                let victim = self.select_victim();
                AccessOutcome::Replaced(self.replace(victim, page, timestamp)?)
            }
        };

        if access.is_write() {
            self.mark_dirty(page);
        }
        Ok(outcome)
    }

    pub fn entry_at(&self, page: PageNumber) -> Option<&PageEntry> {
        self.entries.get(page).and_then(Option::as_ref)
    }

    /// Resident pages in page number order
    pub fn resident_pages(&self) -> impl Iterator<Item = &PageEntry> {
        self.entries.iter().flatten()
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    pub fn resident_count(&self) -> usize {
        self.resident_count
    }

    pub fn free_frame_count(&self) -> usize {
        self.frames.free_count()
    }

    pub fn total_frames(&self) -> usize {
        self.frames.total_frames()
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn virtual_memory_size(&self) -> u64 {
        self.virtual_memory_size
    }

    fn check_range(&self, page: PageNumber) -> Result<(), PageTableError> {
        if page >= self.table_size {
            return Err(PageTableError::PageOutOfRange {
                page,
                table_size: self.table_size,
            });
        }
        Ok(())
    }
}
