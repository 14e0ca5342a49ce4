pub mod entry;
pub mod error;
pub mod frame_allocator;
pub mod page_table;
pub mod replacer;
pub mod shared;

pub use entry::PageEntry;
pub use error::PageTableError;
pub use frame_allocator::FrameAllocator;
pub use page_table::{AccessOutcome, Eviction, PageTable};
pub use replacer::{EvictionPolicy, PolicyKind};
pub use shared::SharedPageTable;
