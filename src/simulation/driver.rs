use std::time::Instant;

use log::{info, warn};

use crate::common::types::Timestamp;
use crate::memory::{PageTable, PolicyKind};
use crate::simulation::config::SimulationConfig;
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::stats::SimulationStats;
use crate::simulation::trace::Trace;

/// Feeds reference traces through a page table and counts what happens
pub struct Simulator {
    table: PageTable,
    frame_count: usize,
    seed: Option<u64>,
}

impl Simulator {
    pub fn new(page_size: u64, virtual_memory_size: u64, frame_count: usize) -> Self {
        Self {
            table: PageTable::new(page_size, virtual_memory_size, frame_count, PolicyKind::Fifo),
            frame_count,
            seed: None,
        }
    }

    /// Build a simulator from a validated configuration
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let simulator =
            Self::new(config.page_size, config.virtual_memory_size, config.frame_count());
        Ok(simulator.with_seed(config.seed))
    }

    /// Seed for the random policy; `None` draws from entropy
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Page table as left by the last pass
    pub fn table(&self) -> &PageTable {
        &self.table
    }

    /// Run one pass of `trace` under `policy`, starting from an empty table
    pub fn run(&mut self, policy: PolicyKind, trace: &Trace) -> Result<SimulationStats> {
        let page_size = self.table.page_size();
        let virtual_memory_size = self.table.virtual_memory_size();

        self.table.reset(page_size, virtual_memory_size, self.frame_count);
        self.table.set_policy(policy.build(self.seed));

        info!("Starting {} simulation over {} references", policy, trace.len());
        let started = Instant::now();
        let mut stats = SimulationStats::new(policy);

        for (time, reference) in trace.references().iter().enumerate() {
            if reference.address >= virtual_memory_size {
                warn!("Invalid logical memory reference {}, skipping", reference.address);
                stats.record_skipped();
                continue;
            }

            let page = reference.page_number(page_size);
            if page >= self.table.table_size() {
                warn!(
                    "Reference {} falls in partial page {} past the page table, skipping",
                    reference.address, page
                );
                stats.record_skipped();
                continue;
            }

            let outcome = self.table.access(page, reference.access, time as Timestamp)?;
            stats.record(&outcome);
        }

        stats.set_elapsed(started.elapsed());
        info!(
            "{} simulation finished: {} faults, {} replacements, {} flushes",
            policy, stats.page_faults, stats.page_replacements, stats.flushes
        );
        Ok(stats)
    }

    /// Run FIFO, LRU and Random one after another on the same table
    pub fn run_all(&mut self, trace: &Trace) -> Result<Vec<SimulationStats>> {
        PolicyKind::ALL
            .iter()
            .map(|&policy| self.run(policy, trace))
            .collect()
    }

    /// Run FIFO, LRU and Random concurrently, each on its own table
    pub fn run_parallel(&self, trace: &Trace) -> Result<Vec<SimulationStats>> {
        let page_size = self.table.page_size();
        let virtual_memory_size = self.table.virtual_memory_size();
        let frame_count = self.frame_count;
        let seed = self.seed;

        let scoped = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = PolicyKind::ALL
                .iter()
                .map(|&policy| {
                    let handle = s.spawn(move |_| {
                        Simulator::new(page_size, virtual_memory_size, frame_count)
                            .with_seed(seed)
                            .run(policy, trace)
                    });
                    (policy, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(policy, handle)| {
                    handle
                        .join()
                        .map_err(|_| SimulationError::WorkerPanicked(policy))
                        .and_then(|result| result)
                })
                .collect::<Result<Vec<_>>>()
        });

        match scoped {
            Ok(results) => results,
            Err(_) => Err(SimulationError::ScopePanicked),
        }
    }
}
