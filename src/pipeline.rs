//! The extraction pipeline: truncate, dedup, and optionally
//! subset-reduce a parsed corpus

use std::collections::HashSet;

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use crate::corpus::ParsedCorpus;
use crate::dedup::{DedupIndex, KeyOptions, StonePositionSet, canonical_keys, dominated_flags};
use crate::error::{Error, Result};
use crate::goban::encode_moves;
use crate::types::GameId;

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Truncate each game to its first N moves before any
    /// canonicalization. `None` means no truncation.
    pub num_stones: Option<usize>,

    /// Detect duplicates across the 8 board symmetries.
    pub symmetry: bool,

    /// Detect duplicates across one-point rigid translations.
    pub shift: bool,

    /// Run the quadratic subset-reduction pass over the unique games.
    pub subset_reduction: bool,

    /// Bound on how many survivors are reported (0 = all).
    pub sample_size: usize,

    /// Random seed for survivor sampling.
    pub seed: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            num_stones: None,
            symmetry: true,
            shift: true,
            subset_reduction: false,
            sample_size: 0,
            seed: None,
        }
    }
}

impl ExtractOptions {
    fn key_options(&self) -> KeyOptions {
        KeyOptions {
            symmetry: self.symmetry,
            shift: self.shift,
        }
    }
}

/// Aggregate counts of an extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractReport {
    /// Closed transcripts seen in the input, well-formed or not.
    pub total_parsed: usize,

    /// Transcripts dropped by the parser for malformed moves.
    pub malformed: usize,

    /// Distinct truncated move texts (dedup with symmetry and shift
    /// disabled).
    pub unique_raw: usize,

    /// Distinct games modulo the enabled symmetry/shift group.
    pub unique_canonical: usize,

    /// Games aborted by an internal out-of-bounds failure.
    pub failed: usize,

    /// Unique games flagged as dominated by the subset pass.
    pub dominated: usize,

    /// Games surviving every enabled pass.
    pub surviving: usize,
}

impl ExtractReport {
    /// Save the report to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a report from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// The outcome of a run: surviving ids plus the counts, along with any
/// per-game internal failures for the caller to surface.
#[derive(Debug)]
pub struct Extraction {
    /// Surviving game ids, in first-seen order.
    pub survivors: Vec<GameId>,
    pub report: ExtractReport,
    /// Games whose canonicalization hit an invariant violation. Should be
    /// empty; anything here is a logic bug worth a diagnostic.
    pub failures: Vec<(GameId, Error)>,
}

/// Single-threaded extraction over an already-parsed corpus.
///
/// Pass order is fixed: raw exact dedup, then canonical-key dedup, then
/// (when enabled) subset reduction over the canonical representatives.
/// No pass interleaves with another, and each mutates only its own state.
pub struct ExtractPipeline {
    options: ExtractOptions,
}

impl ExtractPipeline {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the pipeline.
    pub fn run(&self, corpus: &ParsedCorpus) -> Result<Extraction> {
        self.run_inner(corpus, &mut || {})
    }

    /// Run the pipeline, ticking `progress` once per game during the
    /// dedup pass.
    pub fn run_with_progress(
        &self,
        corpus: &ParsedCorpus,
        progress: &ProgressBar,
    ) -> Result<Extraction> {
        self.run_inner(corpus, &mut || progress.inc(1))
    }

    fn run_inner(
        &self,
        corpus: &ParsedCorpus,
        on_game: &mut dyn FnMut(),
    ) -> Result<Extraction> {
        let key_options = self.options.key_options();
        let mut raw_seen: HashSet<String> = HashSet::new();
        let mut index = DedupIndex::new();
        let mut failures: Vec<(GameId, Error)> = Vec::new();

        for game in &corpus.games {
            let moves = game.truncated(self.options.num_stones);

            // Raw exact dedup first; textually repeated games never reach
            // key construction.
            if !raw_seen.insert(encode_moves(moves)) {
                on_game();
                continue;
            }

            match canonical_keys(moves, key_options) {
                Ok(keys) => match index.find_duplicate(&keys) {
                    Some(representative) => index.record_duplicate(game.id(), representative),
                    None => index.register(game.id(), keys),
                },
                Err(err) => failures.push((game.id(), err)),
            }
            on_game();
        }

        let (survivors, dominated) = if self.options.subset_reduction {
            self.subset_reduce(corpus, index.representatives())
        } else {
            (index.representatives().to_vec(), 0)
        };

        let report = ExtractReport {
            total_parsed: corpus.total_parsed(),
            malformed: corpus.malformed,
            unique_raw: raw_seen.len(),
            unique_canonical: index.unique_count(),
            failed: failures.len(),
            dominated,
            surviving: survivors.len(),
        };

        Ok(Extraction {
            survivors,
            report,
            failures,
        })
    }

    /// Drop every representative whose stone set is dominated by another's.
    fn subset_reduce(
        &self,
        corpus: &ParsedCorpus,
        representatives: &[GameId],
    ) -> (Vec<GameId>, usize) {
        let sets: Vec<StonePositionSet> = representatives
            .iter()
            .map(|id| {
                let game = &corpus.games[id.index()];
                StonePositionSet::from_moves(game.truncated(self.options.num_stones))
            })
            .collect();

        let flags = dominated_flags(&sets);
        let survivors = representatives
            .iter()
            .zip(&flags)
            .filter(|(_, &dominated)| !dominated)
            .map(|(&id, _)| id)
            .collect();
        let dominated = flags.iter().filter(|&&f| f).count();
        (survivors, dominated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_corpus;
    use std::io::Cursor;

    fn corpus(text: &str) -> ParsedCorpus {
        parse_corpus(Cursor::new(text)).unwrap()
    }

    #[test]
    fn raw_duplicates_collapse_before_key_construction() {
        let corpus = corpus(
            "(;one\n;B[aa];W[bb])\n\
             (;two\n;B[aa];W[bb])\n\
             (;three\n;B[cc])\n",
        );
        let extraction = ExtractPipeline::new(ExtractOptions::default())
            .run(&corpus)
            .unwrap();
        assert_eq!(extraction.report.total_parsed, 3);
        assert_eq!(extraction.report.unique_raw, 2);
        assert_eq!(extraction.report.unique_canonical, 2);
        assert_eq!(extraction.survivors.len(), 2);
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn truncation_happens_before_dedup() {
        // The two games differ only after the first move.
        let corpus = corpus(
            "(;one\n;B[aa];W[bb])\n\
             (;two\n;B[aa];W[cc])\n",
        );
        let options = ExtractOptions {
            num_stones: Some(1),
            ..Default::default()
        };
        let extraction = ExtractPipeline::new(options).run(&corpus).unwrap();
        assert_eq!(extraction.report.unique_raw, 1);
        assert_eq!(extraction.survivors, vec![GameId::new(0)]);
    }

    #[test]
    fn symmetric_variant_is_a_duplicate() {
        // Second transcript is the first one under a half turn.
        let corpus = corpus(
            "(;one\n;B[ab];W[cd])\n\
             (;two\n;B[sr];W[qp])\n",
        );
        let extraction = ExtractPipeline::new(ExtractOptions::default())
            .run(&corpus)
            .unwrap();
        assert_eq!(extraction.report.unique_raw, 2);
        assert_eq!(extraction.report.unique_canonical, 1);
        assert_eq!(extraction.survivors, vec![GameId::new(0)]);
    }

    #[test]
    fn subset_reduction_flags_partial_transcripts() {
        // Third game extends the first; with subset reduction on, the
        // shorter one is dominated. Distant positions keep the second
        // game incomparable.
        let corpus = corpus(
            "(;one\n;B[cc];W[dd])\n\
             (;two\n;B[qq];W[pp];B[pq])\n\
             (;three\n;B[cc];W[dd];B[ce])\n",
        );
        let options = ExtractOptions {
            subset_reduction: true,
            // Shifted/symmetric neighbors of these positions overlap; keep
            // the canonical pass narrow so the subset pass does the work.
            symmetry: false,
            shift: false,
            ..Default::default()
        };
        let extraction = ExtractPipeline::new(options).run(&corpus).unwrap();
        assert_eq!(extraction.report.unique_canonical, 3);
        assert_eq!(extraction.report.dominated, 1);
        assert_eq!(
            extraction.survivors,
            vec![GameId::new(1), GameId::new(2)]
        );
    }

    #[test]
    fn report_counts_are_consistent() {
        let corpus = corpus(
            "(;one\n;B[jj])\n\
             (;two\n;B[jk])\n\
             (;bad\n;B[zz])\n",
        );
        let extraction = ExtractPipeline::new(ExtractOptions::default())
            .run(&corpus)
            .unwrap();
        let report = &extraction.report;
        assert_eq!(report.total_parsed, 3);
        assert_eq!(report.malformed, 1);
        // jj and jk are one-point translations of each other.
        assert_eq!(report.unique_raw, 2);
        assert_eq!(report.unique_canonical, 1);
        assert_eq!(report.surviving, 1);
    }
}
