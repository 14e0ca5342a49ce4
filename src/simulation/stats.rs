use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::memory::{AccessOutcome, PolicyKind};

/// Counters collected over one pass of a trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub policy: PolicyKind,
    pub memory_references: u64,
    pub page_faults: u64,
    pub page_replacements: u64,
    pub flushes: u64,
    pub skipped_references: u64,
    pub elapsed_micros: u64,
}

impl SimulationStats {
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            memory_references: 0,
            page_faults: 0,
            page_replacements: 0,
            flushes: 0,
            skipped_references: 0,
            elapsed_micros: 0,
        }
    }

    pub fn record(&mut self, outcome: &AccessOutcome) {
        self.memory_references += 1;
        match outcome {
            AccessOutcome::Hit => {}
            AccessOutcome::Loaded { .. } => self.page_faults += 1,
            AccessOutcome::Replaced(eviction) => {
                self.page_faults += 1;
                self.page_replacements += 1;
                if eviction.is_flush() {
                    self.flushes += 1;
                }
            }
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped_references += 1;
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros)
    }

    /// Fraction of references that faulted
    pub fn fault_rate(&self) -> f64 {
        if self.memory_references == 0 {
            return 0.0;
        }
        self.page_faults as f64 / self.memory_references as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.elapsed();
        writeln!(f, "End of {} simulation", self.policy)?;
        writeln!(
            f,
            "Total time elapsed: {} seconds, {} microseconds",
            elapsed.as_secs(),
            elapsed.subsec_micros()
        )?;
        writeln!(f, "Total memory references: {}", self.memory_references)?;
        writeln!(f, "Total page faults: {}", self.page_faults)?;
        writeln!(f, "Total page replacements: {}", self.page_replacements)?;
        writeln!(f, "Total page flushes: {}", self.flushes)?;
        write!(f, "Skipped references: {}", self.skipped_references)
    }
}
