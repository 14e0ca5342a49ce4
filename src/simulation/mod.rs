pub mod config;
pub mod driver;
pub mod error;
pub mod stats;
pub mod trace;

pub use config::SimulationConfig;
pub use driver::Simulator;
pub use error::SimulationError;
pub use stats::SimulationStats;
pub use trace::{Reference, Trace};
