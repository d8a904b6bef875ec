//! Commit-Fabricator CLI - Backdated commit generator
//!
//! Provides:
//! - Fabricating a random number of backdated commits for every day of a range
//! - Previewing the commits a given seed would produce

mod commands;
mod helpers;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_plan, cmd_run};
use helpers::{DEFAULT_END, DEFAULT_START};

#[derive(Parser)]
#[command(name = "commit-fabricator")]
#[command(about = "Fabricates commits with forged timestamps spread over a date range", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes a file and records a backdated commit for every drawn event
    Run {
        /// Working directory of the repository (default: current directory)
        #[arg(short, long)]
        repo: Option<PathBuf>,

        /// First day of the range (YYYY-MM-DD)
        #[arg(short, long, default_value = DEFAULT_START)]
        start: String,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(short, long, default_value = DEFAULT_END)]
        end: String,

        /// Seed for the random draws (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Version-control program to invoke
        #[arg(long, default_value = "git")]
        git: String,
    },

    /// Shows the commits a run would fabricate, without touching any repository
    Plan {
        /// First day of the range (YYYY-MM-DD)
        #[arg(short, long, default_value = DEFAULT_START)]
        start: String,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(short, long, default_value = DEFAULT_END)]
        end: String,

        /// Seed for the random draws (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the schedule as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    match cli.command {
        Commands::Run { repo, start, end, seed, git } => {
            cmd_run(repo, start, end, seed, git)?;
        }
        Commands::Plan { start, end, seed, json } => {
            cmd_plan(start, end, seed, json)?;
        }
    }

    Ok(())
}
