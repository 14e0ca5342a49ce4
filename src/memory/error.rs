use thiserror::Error;
use crate::common::types::PageNumber;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageTableError {
    #[error("Page {page} is outside the page table (size {table_size})")]
    PageOutOfRange { page: PageNumber, table_size: usize },
    #[error("No free frame available")]
    CapacityExhausted,
}
