use crate::common::types::{
    is_power_of_two, MAX_PAGE_SIZE, MB_IN_BYTES, MIN_PAGE_SIZE, VIRTUAL_MEMORY_SIZE,
};
use crate::simulation::error::{Result, SimulationError};

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Page size in bytes
    pub page_size: u64,

    /// Physical memory size in megabytes
    pub physical_memory_mb: u64,

    /// Size of the virtual address space in bytes
    pub virtual_memory_size: u64,

    /// Seed for the random replacement policy, entropy when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            page_size: 4096,
            physical_memory_mb: 32,
            virtual_memory_size: VIRTUAL_MEMORY_SIZE,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(page_size: u64, physical_memory_mb: u64) -> Self {
        Self {
            page_size,
            physical_memory_mb,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size)
            || !is_power_of_two(self.page_size)
        {
            return Err(SimulationError::InvalidPageSize(self.page_size));
        }
        if self.virtual_memory_size == 0 || self.virtual_memory_size % self.page_size != 0 {
            return Err(SimulationError::InvalidVirtualMemory {
                size: self.virtual_memory_size,
                page_size: self.page_size,
            });
        }
        if !is_power_of_two(self.physical_memory_mb) {
            return Err(SimulationError::InvalidPhysicalMemory(self.physical_memory_mb));
        }
        if self.frame_count() == 0 {
            return Err(SimulationError::NoFrames {
                physical_bytes: self.physical_memory_bytes(),
                page_size: self.page_size,
            });
        }
        Ok(())
    }

    pub fn physical_memory_bytes(&self) -> u64 {
        self.physical_memory_mb.saturating_mul(MB_IN_BYTES)
    }

    /// Number of physical frames
    pub fn frame_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        (self.physical_memory_bytes() / self.page_size) as usize
    }

    /// Number of logical pages
    pub fn table_size(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        (self.virtual_memory_size / self.page_size) as usize
    }
}
