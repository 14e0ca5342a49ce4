use thiserror::Error;

use crate::memory::{PageTableError, PolicyKind};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid page size {0}: must be a power of 2 between 256 and 8192 bytes")]
    InvalidPageSize(u64),
    #[error("Invalid physical memory size {0} MB: must be a power of 2")]
    InvalidPhysicalMemory(u64),
    #[error("Invalid virtual memory size {size}: must be a non-zero multiple of {page_size}")]
    InvalidVirtualMemory { size: u64, page_size: u64 },
    #[error("Physical memory of {physical_bytes} bytes holds no page of {page_size} bytes")]
    NoFrames { physical_bytes: u64, page_size: u64 },
    #[error("Trace IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Page table error: {0}")]
    PageTable(#[from] PageTableError),
    #[error("{0} simulation worker panicked")]
    WorkerPanicked(PolicyKind),
    #[error("Parallel simulation scope panicked")]
    ScopePanicked,
}

pub type Result<T> = std::result::Result<T, SimulationError>;
