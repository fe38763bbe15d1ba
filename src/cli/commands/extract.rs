//! Extract command - deduplicate a corpus and emit the survivors

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::cli::output;
use crate::corpus::{ParsedCorpus, parse_corpus};
use crate::pipeline::{ExtractOptions, ExtractPipeline, Extraction};
use crate::types::GameId;

#[derive(Parser, Debug)]
#[command(about = "Deduplicate a transcript corpus and emit the survivors")]
pub struct ExtractArgs {
    /// Input corpus file (use '-' or omit for stdin)
    pub input: Option<PathBuf>,

    /// Number of survivors to randomly sample and report (0 = all)
    #[arg(long, short = 'n', default_value_t = 0)]
    pub num_games: usize,

    /// Truncate each game to its first N moves before canonicalization
    #[arg(long)]
    pub num_stones: Option<usize>,

    /// Treat symmetric variants as distinct games
    #[arg(long)]
    pub no_symmetry: bool,

    /// Treat shifted variants as distinct games
    #[arg(long)]
    pub no_shift: bool,

    /// Also drop games whose stone set is contained in another game's
    #[arg(long)]
    pub subset_reduction: bool,

    /// Random seed for survivor sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the reduced corpus (stdout when absent)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write the JSON extraction report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl ExtractArgs {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            num_stones: self.num_stones,
            symmetry: !self.no_symmetry,
            shift: !self.no_shift,
            subset_reduction: self.subset_reduction,
            sample_size: self.num_games,
            seed: self.seed,
        }
    }
}

pub fn execute(args: ExtractArgs) -> Result<()> {
    let reader = super::open_input(args.input.as_deref())?;
    let corpus = parse_corpus(reader)?;

    let options = args.options();
    let pipeline = ExtractPipeline::new(options.clone());

    let progress = output::create_dedup_progress(corpus.games.len() as u64);
    let extraction = pipeline.run_with_progress(&corpus, &progress)?;
    progress.finish_and_clear();

    for (id, err) in &extraction.failures {
        eprintln!("game {id} aborted: {err}");
    }

    let sampled = sample_survivors(&extraction, options.sample_size, options.seed);
    emit_survivors(&corpus, &sampled, options.num_stones, args.output.as_deref())?;

    // Counts go to stderr so a corpus emitted on stdout stays clean.
    let report = &extraction.report;
    eprintln!(
        "# of games: {}, unique: {}, canonical: {}, dominated: {}, reported: {}",
        output::format_number(report.total_parsed),
        output::format_number(report.unique_raw),
        output::format_number(report.unique_canonical),
        output::format_number(report.dominated),
        output::format_number(sampled.len()),
    );

    if let Some(path) = &args.report {
        extraction.report.save(path)?;
        println!("Report written to {}", path.display());
    }

    if !extraction.failures.is_empty() {
        bail!(
            "{} game(s) aborted with internal errors",
            extraction.failures.len()
        );
    }
    Ok(())
}

/// Randomly choose `sample_size` survivors, or keep all of them in
/// first-seen order when the bound is zero or not binding.
fn sample_survivors(extraction: &Extraction, sample_size: usize, seed: Option<u64>) -> Vec<GameId> {
    let mut survivors = extraction.survivors.clone();
    if sample_size == 0 || sample_size >= survivors.len() {
        return survivors;
    }
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    survivors.shuffle(&mut rng);
    survivors.truncate(sample_size);
    survivors
}

fn emit_survivors(
    corpus: &ParsedCorpus,
    survivors: &[GameId],
    num_stones: Option<usize>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(writer);

    for id in survivors {
        let game = &corpus.games[id.index()];
        writeln!(writer, "{}", game.header())?;
        writeln!(writer)?;
        writeln!(writer, "{}", game.transcript_body(num_stones))?;
    }
    writer.flush()?;
    Ok(())
}
