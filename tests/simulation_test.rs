use anyhow::Result;

use pagesim::common::types::VIRTUAL_MEMORY_SIZE;
use pagesim::memory::PolicyKind;
use pagesim::simulation::{SimulationConfig, SimulationError, SimulationStats, Simulator, Trace};

mod common;
use common::create_trace_file;

fn counters(stats: &SimulationStats) -> (PolicyKind, u64, u64, u64, u64, u64) {
    (
        stats.policy,
        stats.memory_references,
        stats.page_faults,
        stats.page_replacements,
        stats.flushes,
        stats.skipped_references,
    )
}

#[test]
fn test_fifo_end_to_end() -> Result<()> {
    let file = create_trace_file(&[0, 4096, 8192, 0])?;
    let trace = Trace::from_path(file.path())?;

    let mut simulator = Simulator::new(4096, VIRTUAL_MEMORY_SIZE, 2);
    let stats = simulator.run(PolicyKind::Fifo, &trace)?;

    assert_eq!(stats.page_faults, 4);
    assert_eq!(stats.page_replacements, 2);
    assert_eq!(stats.flushes, 0);

    let table = simulator.table();
    assert!(table.contains(0));
    assert!(table.contains(2));
    assert!(!table.contains(1));
    assert_eq!(table.resident_count(), 2);

    Ok(())
}

#[test]
fn test_lru_keeps_hot_page() -> Result<()> {
    // Page 0 is touched between every other reference
    let trace = Trace::from_addresses([0, 4096, 0, 8192, 0, 12288, 0]);
    let mut simulator = Simulator::new(4096, VIRTUAL_MEMORY_SIZE, 2);

    let lru = simulator.run(PolicyKind::Lru, &trace)?;
    assert_eq!(lru.page_faults, 4);
    assert_eq!(lru.page_replacements, 2);

    let fifo = simulator.run(PolicyKind::Fifo, &trace)?;
    assert!(fifo.page_faults > lru.page_faults);

    Ok(())
}

#[test]
fn test_flushes_counted_for_dirty_victims() -> Result<()> {
    // 1 is a write to page 0, everything else reads
    let trace = Trace::from_addresses([1, 4096, 8192, 12288]);
    let mut simulator = Simulator::new(4096, VIRTUAL_MEMORY_SIZE, 2);

    let stats = simulator.run(PolicyKind::Fifo, &trace)?;
    assert_eq!(stats.page_replacements, 2);
    assert_eq!(stats.flushes, 1);

    Ok(())
}

#[test]
fn test_out_of_range_and_malformed_input() -> Result<()> {
    let trace = Trace::parse("0 nope 134217728 4096 999999999999");
    assert_eq!(trace.skipped(), 1);

    let mut simulator = Simulator::new(4096, VIRTUAL_MEMORY_SIZE, 4);
    let stats = simulator.run(PolicyKind::Random, &trace)?;
    assert_eq!(stats.memory_references, 2);
    assert_eq!(stats.skipped_references, 2);

    Ok(())
}

#[test]
fn test_parallel_matches_sequential() -> Result<()> {
    let addresses: Vec<u64> = (0..2_000u64).map(|i| (i * 7919) % (64 * 4096) + (i % 2)).collect();
    let trace = Trace::from_addresses(addresses);
    let mut simulator = Simulator::new(4096, VIRTUAL_MEMORY_SIZE, 16).with_seed(Some(99));
    let sequential = simulator.run_all(&trace)?;
    let parallel = simulator.run_parallel(&trace)?;

    assert_eq!(sequential.len(), 3);
    let sequential: Vec<_> = sequential.iter().map(counters).collect();
    let parallel: Vec<_> = parallel.iter().map(counters).collect();
    assert_eq!(sequential, parallel);

    Ok(())
}

#[test]
fn test_small_memory_forces_replacements() -> Result<()> {
    let addresses: Vec<u64> = (0..1_000u64).map(|i| (i % 50) * 8192).collect();
    let trace = Trace::from_addresses(addresses);
    let mut simulator = Simulator::new(8192, VIRTUAL_MEMORY_SIZE, 10).with_seed(Some(3));

    for stats in simulator.run_all(&trace)? {
        assert_eq!(stats.memory_references, 1_000);
        assert!(stats.page_replacements > 0, "{} never replaced", stats.policy);
        assert_eq!(stats.page_faults, stats.page_replacements + 10);
    }

    Ok(())
}

#[test]
fn test_from_config_geometry() -> Result<()> {
    let config = SimulationConfig::new(8192, 2).with_seed(1);
    let simulator = Simulator::from_config(&config)?;

    assert_eq!(simulator.table().total_frames(), 256);
    assert_eq!(simulator.table().table_size(), 16384);
    assert!(matches!(
        Simulator::from_config(&SimulationConfig::new(4096, 6)),
        Err(SimulationError::InvalidPhysicalMemory(6))
    ));

    Ok(())
}

#[test]
fn test_virtual_memory_with_partial_page() -> Result<()> {
    let mut config = SimulationConfig::new(4096, 1);
    config.virtual_memory_size = 10_000;
    assert!(matches!(
        Simulator::from_config(&config),
        Err(SimulationError::InvalidVirtualMemory { size: 10_000, page_size: 4096 })
    ));

    // Built directly, the partial page is skipped and later references still run
    let mut simulator = Simulator::new(4096, 10_000, 2);
    let stats = simulator.run(PolicyKind::Lru, &Trace::from_addresses([0, 9000, 4096]))?;
    assert_eq!(stats.skipped_references, 1);
    assert_eq!(stats.page_faults, 2);
    assert!(simulator.table().contains(1));

    Ok(())
}

#[test]
fn test_missing_trace_file() {
    let result = Trace::from_path("/nonexistent/references.txt");
    assert!(matches!(result, Err(SimulationError::Io(_))));
}
