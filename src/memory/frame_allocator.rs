use std::collections::VecDeque;

use crate::common::types::FrameNumber;

/// Pool of free physical frames
///
/// Frames are handed out from the front of the free list and returned to the back.
/// The allocator trusts its caller: releasing a frame that is already free is not detected.
#[derive(Debug)]
pub struct FrameAllocator {
    total_frames: usize,
    free_list: VecDeque<FrameNumber>,
}

impl FrameAllocator {
    pub fn new(frame_count: usize) -> Self {
        let mut allocator = Self {
            total_frames: 0,
            free_list: VecDeque::with_capacity(frame_count),
        };
        allocator.reset(frame_count);
        allocator
    }

    /// Refill the pool with frames `0..frame_count`
    pub fn reset(&mut self, frame_count: usize) {
        self.free_list.clear();
        self.free_list.extend(0..frame_count);
        self.total_frames = frame_count;
    }

    /// Take a free frame, or `None` if physical memory is exhausted
    pub fn acquire(&mut self) -> Option<FrameNumber> {
        self.free_list.pop_front()
    }

    /// Return a previously acquired frame to the pool
    pub fn release(&mut self, frame: FrameNumber) {
        self.free_list.push_back(frame);
    }

    pub fn is_full(&self) -> bool {
        self.free_list.is_empty()
    }

    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }
}
