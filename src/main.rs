use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use pagesim::common::types::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use pagesim::memory::PolicyKind;
use pagesim::simulation::{SimulationConfig, SimulationStats, Simulator, Trace};

#[derive(Parser)]
#[command(author, version, about = "pagesim - compare FIFO, LRU and random page replacement")]
struct Cli {
    /// Page size in bytes (power of 2 between 256 and 8192)
    page_size: u64,

    /// Physical memory size in megabytes (power of 2)
    physical_memory_mb: u64,

    /// File of whitespace separated logical addresses
    #[arg(short, long, default_value = "references.txt")]
    trace: PathBuf,

    /// Replacement policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Seed for the random policy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Run the policies concurrently, each on its own page table
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    Random,
    All,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = SimulationConfig::new(cli.page_size, cli.physical_memory_mb);
    config.seed = cli.seed;
    config.validate().with_context(|| {
        format!(
            "page size must be a power of 2 in {}..={}, physical memory a power of 2 in MB",
            MIN_PAGE_SIZE, MAX_PAGE_SIZE
        )
    })?;

    let trace = Trace::from_path(&cli.trace)
        .with_context(|| format!("failed to read trace file {}", cli.trace.display()))?;

    let mut simulator = Simulator::from_config(&config)?;

    if cli.format == Format::Text {
        print_banner(&config, simulator.table().table_size(), &trace);
    }

    let results = match (cli.policy, cli.parallel) {
        (PolicyArg::All, true) => simulator.run_parallel(&trace)?,
        (PolicyArg::All, false) => simulator.run_all(&trace)?,
        (PolicyArg::Fifo, _) => vec![simulator.run(PolicyKind::Fifo, &trace)?],
        (PolicyArg::Lru, _) => vec![simulator.run(PolicyKind::Lru, &trace)?],
        (PolicyArg::Random, _) => vec![simulator.run(PolicyKind::Random, &trace)?],
    };

    match cli.format {
        Format::Text => print_results(&results),
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    Ok(())
}

fn print_banner(config: &SimulationConfig, table_size: usize, trace: &Trace) {
    println!("Page Size: {} B", config.page_size);
    println!("Phys Mem Size: {} B", config.physical_memory_bytes());
    println!("Number of Frames: {}", config.frame_count());
    println!("Page Table size: {}", table_size);
    println!("References: {}", trace.len());
    if trace.skipped() > 0 {
        println!("Malformed trace entries skipped: {}", trace.skipped());
    }
    println!();
}

fn print_results(results: &[SimulationStats]) {
    for stats in results {
        println!("{}", stats);
        println!();
    }
    println!("End of Simulations");
}
