//! Splitting a concatenated corpus stream into parsed games
//!
//! A transcript starts at a line beginning with `(` (kept verbatim as the
//! metadata header) and ends at a line ending with `)`. The body between
//! the outer parentheses is a semicolon-separated field list whose first
//! field is metadata tail; every following field must be a move token.
//!
//! Malformed transcripts are counted and skipped rather than aborting the
//! run; coordinate validation happens here so the downstream engine never
//! sees an off-board stone.

use std::io::BufRead;

use crate::error::Result;
use crate::goban::Move;
use crate::types::GameId;

use super::game::Game;

/// The result of splitting a corpus stream.
#[derive(Debug, Default)]
pub struct ParsedCorpus {
    /// Well-formed games, ids dense in parse order.
    pub games: Vec<Game>,
    /// Transcripts dropped because of a malformed move token.
    pub malformed: usize,
}

impl ParsedCorpus {
    /// Total number of closed transcripts seen, well-formed or not.
    pub fn total_parsed(&self) -> usize {
        self.games.len() + self.malformed
    }
}

/// Parse a corpus of concatenated transcripts from a reader.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the underlying reader fails. Malformed
/// transcripts are not errors at this level; they are counted in
/// [`ParsedCorpus::malformed`] and excluded.
pub fn parse_corpus<R: BufRead>(reader: R) -> Result<ParsedCorpus> {
    let mut corpus = ParsedCorpus::default();
    let mut header: Option<String> = None;
    let mut body = String::new();

    for line in reader.lines() {
        let line = line.map_err(|source| crate::Error::Io {
            operation: "read corpus line".to_string(),
            source,
        })?;
        let line = line.trim();

        if let Some(rest) = line.strip_prefix('(') {
            // A new transcript begins; an unclosed previous one is dropped.
            if rest.ends_with(')') {
                // Single-line transcript: the header is everything before
                // the first move field.
                let inner = &rest[..rest.len() - 1];
                match inner.split_once(';') {
                    Some((meta, moves_text)) => {
                        finish_transcript(&mut corpus, &format!("({meta}"), moves_text);
                    }
                    None => finish_transcript(&mut corpus, line, ""),
                }
                header = None;
            } else {
                header = Some(line.to_string());
                body.clear();
            }
            continue;
        }

        let Some(head) = header.as_deref() else {
            continue; // noise between transcripts
        };

        body.push_str(line);
        if line.ends_with(')') {
            let inner = &body[..body.len() - 1];
            // The first semicolon-delimited field is metadata tail, not a move.
            let moves_text = match inner.split_once(';') {
                Some((_, rest)) => rest,
                None => "",
            };
            finish_transcript(&mut corpus, head, moves_text);
            header = None;
        }
    }

    Ok(corpus)
}

fn finish_transcript(corpus: &mut ParsedCorpus, header: &str, moves_text: &str) {
    match parse_moves(moves_text) {
        Ok(moves) => {
            let id = GameId::new(corpus.games.len());
            corpus
                .games
                .push(Game::new(id, header.to_string(), moves));
        }
        Err(_) => corpus.malformed += 1,
    }
}

fn parse_moves(text: &str) -> Result<Vec<Move>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(';').map(Move::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> ParsedCorpus {
        parse_corpus(Cursor::new(text)).unwrap()
    }

    #[test]
    fn splits_multiline_transcripts() {
        let corpus = parse(
            "(;GM[1]SZ[19]PB[one]\n\
             ;B[pd];W[dp]\n\
             ;B[qq])\n\
             (;GM[1]SZ[19]PB[two]\n\
             ;B[aa])\n",
        );
        assert_eq!(corpus.games.len(), 2);
        assert_eq!(corpus.malformed, 0);
        assert_eq!(corpus.games[0].moves().len(), 3);
        assert_eq!(corpus.games[0].header(), "(;GM[1]SZ[19]PB[one]");
        assert_eq!(corpus.games[1].moves().len(), 1);
        assert_eq!(corpus.games[1].id().index(), 1);
    }

    #[test]
    fn splits_single_line_transcripts() {
        let corpus = parse("(meta;B[aa];W[bb])\n");
        assert_eq!(corpus.games.len(), 1);
        assert_eq!(corpus.games[0].moves().len(), 2);
        assert_eq!(corpus.games[0].header(), "(meta");
    }

    #[test]
    fn malformed_transcripts_are_counted_and_skipped() {
        let corpus = parse(
            "(;GM[1]\n;B[pd];W[zz])\n\
             (;GM[1]\n;B[pd])\n\
             (;GM[1]\n;B[pd];pass)\n",
        );
        assert_eq!(corpus.games.len(), 1);
        assert_eq!(corpus.malformed, 2);
        assert_eq!(corpus.total_parsed(), 3);
    }

    #[test]
    fn header_only_transcript_has_no_moves() {
        let corpus = parse("(;GM[1]\n)\n");
        assert_eq!(corpus.games.len(), 1);
        assert!(corpus.games[0].moves().is_empty());
    }

    #[test]
    fn noise_outside_transcripts_is_ignored() {
        let corpus = parse("garbage\n(;GM[1]\n;B[aa])\ntrailing\n");
        assert_eq!(corpus.games.len(), 1);
        assert_eq!(corpus.malformed, 0);
    }
}
