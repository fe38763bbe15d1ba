//! gosieve CLI - symmetry-aware deduplication of Go transcript corpora
//!
//! This CLI provides:
//! - Extracting a reduced corpus with duplicate and near-duplicate games
//!   removed, optionally sampling a bounded number of survivors
//! - Reporting corpus statistics without emitting anything

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gosieve")]
#[command(version, about = "Deduplicate 19x19 game transcript corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate a corpus and emit the surviving transcripts
    Extract(gosieve::cli::commands::extract::ExtractArgs),

    /// Print dedup statistics for a corpus
    Stats(gosieve::cli::commands::stats::StatsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(args) => gosieve::cli::commands::extract::execute(args),
        Commands::Stats(args) => gosieve::cli::commands::stats::execute(args),
    }
}
