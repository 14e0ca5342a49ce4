#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;
use pagesim::common::types::VIRTUAL_MEMORY_SIZE;
use pagesim::memory::{PageTable, PolicyKind};

// Page table over the full 128 MB address space
pub fn create_test_page_table(page_size: u64, frames: usize, policy: PolicyKind) -> PageTable {
    PageTable::with_policy(page_size, VIRTUAL_MEMORY_SIZE, frames, policy.build(Some(42)))
}

// Write a trace file with one address per line
pub fn create_trace_file(addresses: &[u64]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for address in addresses {
        writeln!(file, "{}", address)?;
    }
    file.flush()?;
    Ok(file)
}

// Capacity and frame uniqueness must hold in every reachable state
pub fn assert_table_invariants(table: &PageTable) {
    assert_eq!(
        table.resident_count() + table.free_frame_count(),
        table.total_frames(),
        "resident pages and free frames must cover every frame"
    );
    assert!(table.resident_count() <= table.table_size());

    let frames: HashSet<_> = table.resident_pages().map(|entry| entry.frame_number()).collect();
    assert_eq!(frames.len(), table.resident_count(), "two pages share a frame");
    assert!(frames.iter().all(|&frame| frame < table.total_frames()));
}
