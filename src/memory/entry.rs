use crate::common::types::{FrameNumber, PageNumber, Timestamp};

/// A resident page: which frame holds it and what has happened to it since it was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    page_number: PageNumber,
    frame_number: FrameNumber,
    dirty: bool,
    valid: bool,
    last_access_time: Timestamp,
}

impl PageEntry {
    pub fn new(page_number: PageNumber, frame_number: FrameNumber, timestamp: Timestamp) -> Self {
        Self {
            page_number,
            frame_number,
            dirty: false,
            valid: true,
            last_access_time: timestamp,
        }
    }

    pub fn page_number(&self) -> PageNumber {
        self.page_number
    }

    pub fn frame_number(&self) -> FrameNumber {
        self.frame_number
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn last_access_time(&self) -> Timestamp {
        self.last_access_time
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn touch(&mut self, timestamp: Timestamp) {
        self.last_access_time = timestamp;
    }
}
