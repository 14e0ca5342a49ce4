// pagesim: demand paging simulator

pub mod common;
pub mod memory;
pub mod simulation;

// Re-export key items for convenient access
pub use memory::{
    AccessOutcome, Eviction, EvictionPolicy, PageEntry, PageTable, PageTableError, PolicyKind,
};
pub use memory::SharedPageTable;
pub use simulation::{SimulationConfig, SimulationError, SimulationStats, Simulator, Trace};
