//! End-to-end tests for the extraction pipeline

use std::io::Cursor;

use gosieve::corpus::{ParsedCorpus, parse_corpus};
use gosieve::pipeline::{ExtractOptions, ExtractPipeline, ExtractReport};
use gosieve::types::GameId;

fn corpus(text: &str) -> ParsedCorpus {
    parse_corpus(Cursor::new(text)).unwrap()
}

/// The three-game scenario: a game, its reflection, and an extension.
///
/// Pass order is pinned: canonical dedup first (collapsing the reflected
/// game into the first-seen one), then subset reduction (dropping the
/// shorter game in favor of its extension).
#[test]
fn reflection_collapses_and_extension_dominates() {
    // Game two is game one under the main-diagonal reflection; game three
    // extends game one by a move.
    let corpus = corpus(
        "(;one\n;B[ab];W[cd])\n\
         (;two\n;B[ba];W[dc])\n\
         (;three\n;B[ab];W[cd];B[ef])\n",
    );

    // Dedup only: the reflection is absorbed, the extension survives.
    let extraction = ExtractPipeline::new(ExtractOptions::default())
        .run(&corpus)
        .unwrap();
    assert_eq!(extraction.report.unique_canonical, 2);
    assert_eq!(
        extraction.survivors,
        vec![GameId::new(0), GameId::new(2)]
    );

    // With subset reduction, the first game's positions are contained in
    // the third's, so only the extension remains.
    let options = ExtractOptions {
        subset_reduction: true,
        ..Default::default()
    };
    let extraction = ExtractPipeline::new(options).run(&corpus).unwrap();
    assert_eq!(extraction.report.dominated, 1);
    assert_eq!(extraction.survivors, vec![GameId::new(2)]);
    assert_eq!(extraction.report.surviving, 1);
}

#[test]
fn truncation_applies_before_every_pass() {
    // All three games share the same first two moves.
    let corpus = corpus(
        "(;one\n;B[dd];W[pp];B[dp])\n\
         (;two\n;B[dd];W[pp];W[pd])\n\
         (;three\n;B[dd];W[pp])\n",
    );
    let options = ExtractOptions {
        num_stones: Some(2),
        ..Default::default()
    };
    let extraction = ExtractPipeline::new(options).run(&corpus).unwrap();
    assert_eq!(extraction.report.unique_raw, 1);
    assert_eq!(extraction.report.unique_canonical, 1);
    assert_eq!(extraction.survivors, vec![GameId::new(0)]);
}

#[test]
fn empty_games_collapse_to_one_representative() {
    let corpus = corpus("(;one\n)\n(;two\n)\n");
    let extraction = ExtractPipeline::new(ExtractOptions::default())
        .run(&corpus)
        .unwrap();
    assert_eq!(extraction.report.unique_raw, 1);
    assert_eq!(extraction.report.unique_canonical, 1);
    assert_eq!(extraction.survivors, vec![GameId::new(0)]);
}

#[test]
fn survivors_keep_first_seen_order() {
    let corpus = corpus(
        "(;a\n;B[aa])\n\
         (;b\n;B[jj])\n\
         (;c\n;B[pp];W[dd])\n\
         (;d\n;B[jj];W[kk];B[ll])\n",
    );
    let extraction = ExtractPipeline::new(ExtractOptions::default())
        .run(&corpus)
        .unwrap();
    let indices: Vec<usize> = extraction.survivors.iter().map(|id| id.index()).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
}

#[test]
fn report_roundtrips_through_json() {
    let corpus = corpus("(;one\n;B[aa];W[bb])\n(;two\n;B[zz])\n");
    let extraction = ExtractPipeline::new(ExtractOptions::default())
        .run(&corpus)
        .unwrap();

    let temp_file = tempfile::NamedTempFile::new().unwrap();
    extraction.report.save(temp_file.path()).unwrap();
    let loaded = ExtractReport::load(temp_file.path()).unwrap();
    assert_eq!(loaded, extraction.report);
    assert_eq!(loaded.malformed, 1);
}

#[test]
fn emitted_transcripts_reconstruct_from_survivors() {
    let corpus = corpus("(;GM[1]PB[one]\n;B[pd];W[dp];B[qq])\n");
    let extraction = ExtractPipeline::new(ExtractOptions::default())
        .run(&corpus)
        .unwrap();
    assert_eq!(extraction.survivors.len(), 1);

    let game = &corpus.games[extraction.survivors[0].index()];
    assert_eq!(game.header(), "(;GM[1]PB[one]");
    assert_eq!(game.transcript_body(None), ";B[pd];W[dp];B[qq])");
    assert_eq!(game.transcript_body(Some(2)), ";B[pd];W[dp])");
}
