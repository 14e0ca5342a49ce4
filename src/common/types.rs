use serde::{Deserialize, Serialize};

/// Size of the simulated virtual address space in bytes (128 MB)
pub const VIRTUAL_MEMORY_SIZE: u64 = 134_217_728;

/// Bytes per megabyte, used to convert the physical memory parameter
pub const MB_IN_BYTES: u64 = 1_048_576;

/// Smallest accepted page size in bytes
pub const MIN_PAGE_SIZE: u64 = 256;

/// Largest accepted page size in bytes
pub const MAX_PAGE_SIZE: u64 = 8192;

/// Logical page index type
pub type PageNumber = usize;

/// Physical frame index type
pub type FrameNumber = usize;

/// Logical clock value attached to inserts and accesses
pub type Timestamp = u64;

/// Logical memory address type
pub type Address = u64;

/// Kind of memory reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    Read,
    Write,
}

impl AccessType {
    /// Even addresses are reads, odd addresses are writes
    pub fn from_address(address: Address) -> Self {
        if address % 2 == 0 {
            AccessType::Read
        } else {
            AccessType::Write
        }
    }

    pub fn is_write(self) -> bool {
        self == AccessType::Write
    }
}

pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && n & (n - 1) == 0
}
