//! Stats command - print corpus counts without emitting anything

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::output;
use crate::corpus::parse_corpus;
use crate::goban::diagram;
use crate::pipeline::{ExtractOptions, ExtractPipeline};

#[derive(Parser, Debug)]
#[command(about = "Report dedup statistics for a transcript corpus")]
pub struct StatsArgs {
    /// Input corpus file (use '-' or omit for stdin)
    pub input: Option<PathBuf>,

    /// Truncate each game to its first N moves before canonicalization
    #[arg(long)]
    pub num_stones: Option<usize>,

    /// Treat symmetric variants as distinct games
    #[arg(long)]
    pub no_symmetry: bool,

    /// Treat shifted variants as distinct games
    #[arg(long)]
    pub no_shift: bool,

    /// Also run the subset-reduction pass
    #[arg(long)]
    pub subset_reduction: bool,

    /// Print a board diagram for each surviving game
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let reader = super::open_input(args.input.as_deref())?;
    let corpus = parse_corpus(reader)?;

    let options = ExtractOptions {
        num_stones: args.num_stones,
        symmetry: !args.no_symmetry,
        shift: !args.no_shift,
        subset_reduction: args.subset_reduction,
        ..Default::default()
    };
    let pipeline = ExtractPipeline::new(options);

    let spinner = output::create_spinner("deduplicating corpus...");
    let extraction = pipeline.run(&corpus)?;
    spinner.finish_and_clear();

    for (id, err) in &extraction.failures {
        eprintln!("game {id} aborted: {err}");
    }

    output::print_report(&extraction.report);

    if args.verbose {
        for id in &extraction.survivors {
            let game = &corpus.games[id.index()];
            println!("\n{} {}", game.id(), game.header());
            print!("{}", diagram(game.truncated(args.num_stones)));
        }
    }

    if !extraction.failures.is_empty() {
        bail!(
            "{} game(s) aborted with internal errors",
            extraction.failures.len()
        );
    }
    Ok(())
}
