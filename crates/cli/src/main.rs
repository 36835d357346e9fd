//! Trace-driven cache simulator CLI.
//!
//! This binary runs one cache configuration over one trace file. It performs:
//! 1. **Argument parsing:** Cache size (KiB), block size, associativity, policy, trace path.
//! 2. **Simulation:** Streams the trace through an `AccessSimulator`.
//! 3. **Reporting:** Prints the statistics as text (default) or JSON.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{Associativity, CacheConfig, ReplacementPolicy};
use cachesim_core::sim::TraceReader;
use cachesim_core::{AccessSimulator, SimReport};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Simulate a write-back, write-allocate cache over a memory trace.\n\nEach trace record is '<label> <hex address>' where label 0 is a read and 1 is a write.\n\nExamples:\n  cachesim 32 64 4 LRU traces/gcc.trace\n  cachesim 16 32 f FIFO traces/swim.trace --json"
)]
struct Cli {
    /// Total cache size in KiB.
    cache_size_kib: usize,

    /// Block size in bytes (power of two).
    block_size: usize,

    /// Number of ways, or a word starting with 'f' for fully associative.
    associativity: Associativity,

    /// Replacement policy: 'LRU', anything else selects FIFO.
    policy: String,

    /// Trace file to simulate.
    trace: String,

    /// Address width in bits used to size the tag.
    #[arg(long, default_value_t = 32)]
    address_width: u32,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = CacheConfig::from_kib(
        cli.cache_size_kib,
        cli.block_size,
        cli.associativity,
        ReplacementPolicy::from_name(&cli.policy),
    );
    config.address_width = cli.address_width;

    match simulate(&config, &cli.trace) {
        Ok(report) => {
            if let Err(e) = write_report(&mut io::stdout().lock(), &cli.trace, &report, cli.json) {
                eprintln!("[!] FATAL: could not write report: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to `warn` (or `debug` when verbose).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn simulate(config: &CacheConfig, trace: &str) -> Result<SimReport, cachesim_core::common::SimError> {
    tracing::info!(trace, policy = %config.policy, ways = %config.ways, "simulating");
    let mut sim = AccessSimulator::new(config)?;
    let reader = TraceReader::open(trace)?;
    sim.run(reader)
}

/// Writes the report as pretty JSON, or as text headed by the trace path.
fn write_report<W: Write>(out: &mut W, trace: &str, report: &SimReport, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::from)?;
        writeln!(out)
    } else {
        writeln!(out, "Input file: {trace}")?;
        writeln!(out, "{report}")
    }
}
