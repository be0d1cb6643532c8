//! Cache simulator CLI.
//!
//! This binary drives a cache hierarchy from the command line. It performs:
//! 1. **Run:** Build a hierarchy (JSON config or defaults), replay a
//!    synthetic access workload against it, and print the per-level report.
//! 2. **Config:** Print the default configuration as JSON, as a starting
//!    point for custom hierarchies.

use clap::{Parser, Subcommand, ValueEnum};
use std::{fs, process};

use cachesim_core::{CacheHierarchy, Config};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Hierarchical set-associative cache simulator",
    long_about = "Replay synthetic access workloads against a configurable cache hierarchy.\n\nExamples:\n  cachesim run\n  cachesim run --pattern random --accesses 100000\n  cachesim config > hierarchy.json\n  cachesim run --config hierarchy.json --pattern mixed"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Synthetic access patterns.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Pattern {
    /// Consecutive bytes, ascending.
    Sequential,
    /// Every 256th byte (one access per fourth line).
    Strided,
    /// Uniformly random addresses.
    Random,
    /// Random reads and writes over a working set with re-use.
    Mixed,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a hierarchy and replay a synthetic workload.
    Run {
        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Access pattern to replay.
        #[arg(short, long, value_enum, default_value_t = Pattern::Sequential)]
        pattern: Pattern,

        /// Number of accesses to issue.
        #[arg(short = 'n', long, default_value_t = 100_000)]
        accesses: u64,
    },

    /// Print the default configuration as JSON.
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            pattern,
            accesses,
        } => cmd_run(config.as_deref(), pattern, accesses),
        Commands::Config => cmd_config(),
    }
}

/// Loads a config (file or defaults), builds the hierarchy, replays the
/// pattern, and prints the report.
fn cmd_run(config_path: Option<&str>, pattern: Pattern, accesses: u64) {
    let config = config_path.map_or_else(Config::default, load_config);

    let mut hierarchy = match CacheHierarchy::new(&config) {
        Ok(h) => h,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(1);
        }
    };

    println!(
        "Hierarchy: {} level(s), {} KiB backing store, {:?} pattern, {} accesses",
        hierarchy.depth(),
        config.memory.size_bytes / 1024,
        pattern,
        accesses
    );
    println!();

    replay(&mut hierarchy, pattern, accesses, config.memory.size_bytes as u64);
    print!("{}", hierarchy.report());
}

/// Issues `accesses` reads/writes following `pattern` over `span` bytes.
fn replay(hierarchy: &mut CacheHierarchy, pattern: Pattern, accesses: u64, span: u64) {
    let mut rng: u64 = 0x243F_6A88_85A3_08D3;
    let mut next = move || {
        rng ^= rng << 13;
        rng ^= rng >> 7;
        rng ^= rng << 17;
        rng
    };

    for i in 0..accesses {
        match pattern {
            Pattern::Sequential => {
                let _ = hierarchy.read_byte(i % span);
            }
            Pattern::Strided => {
                let _ = hierarchy.read_byte((i * 256) % span);
            }
            Pattern::Random => {
                let _ = hierarchy.read_byte(next() % span);
            }
            Pattern::Mixed => {
                // Re-use a small working set so upper levels see hits.
                let working_set = span / 8;
                let addr = next() % working_set;
                if i % 3 == 0 {
                    hierarchy.write_byte(addr, (i & 0xFF) as u8);
                } else {
                    let _ = hierarchy.read_byte(addr);
                }
            }
        }
    }
}

/// Reads and parses a JSON configuration file; exits on failure.
fn load_config(path: &str) -> Config {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("cannot parse {path}: {err}");
            process::exit(1);
        }
    }
}

/// Prints the default configuration as pretty JSON.
fn cmd_config() {
    match serde_json::to_string_pretty(&Config::default()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("cannot serialize default config: {err}");
            process::exit(1);
        }
    }
}
