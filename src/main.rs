//! Algorithms CLI - runnable demos for the crate's algorithm exercises
//!
//! ## Commands
//!
//! ### (none) - Two Sum demo
//! Runs the pair-sum finder on the configured sample input and prints
//! `TwoSum => indices: [0, 1]`.
//!
//! ### `two-sum` - Find two indices whose values sum to a target
//! Input and target come from flags, falling back to configuration.
//!
//! ### `lru` - Replay the LRU cache walkthrough
//! Inserts, reads and updates a few keys, printing the recency order after each step.
//!
//! ## Configuration
//!
//! Read from `config.yaml` in the current directory, or from `--config <path>`.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Control logging verbosity (e.g., `info`, `debug`, `trace`)
//!
//! ## Examples
//!
//! ```bash
//! algorithms
//! algorithms two-sum --nums 3,2,4 --target 6
//! algorithms two-sum --json
//! algorithms lru --capacity 3
//! ```

use algorithms::{find_pair_sum, init_logging, lru_cache, two_sum, Config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Runnable demos for classic algorithm exercises", long_about = None)]
struct Cli {
    /// Path to a YAML config file (defaults to ./config.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find two indices whose values sum to the target
    TwoSum {
        /// Comma-separated input values
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        nums: Option<Vec<i64>>,

        /// Target sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<i64>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Replay the LRU cache walkthrough
    Lru {
        /// Cache capacity
        #[arg(long)]
        capacity: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_logging(Some(&config.logging.level), config.logging.output)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::TwoSum { nums, target, json }) => {
            let nums = nums.unwrap_or(config.two_sum.nums);
            let target = target.unwrap_or(config.two_sum.target);
            info!(len = nums.len(), target, "searching for pair sum");

            let result = find_pair_sum(&nums, target);
            if json {
                println!("{}", two_sum::render_json(result)?);
            } else {
                println!("{}", two_sum::render(&nums, result));
            }
        }

        Some(Commands::Lru { capacity }) => {
            let capacity = capacity.unwrap_or(config.lru.capacity);
            for line in lru_cache::walkthrough(capacity)? {
                println!("{}", line);
            }
        }

        None => {
            let result = find_pair_sum(&config.two_sum.nums, config.two_sum.target);
            println!("{}", two_sum::render(&config.two_sum.nums, result));
        }
    }

    Ok(())
}
