//! A single parsed transcript

use serde::{Deserialize, Serialize};

use crate::goban::{Move, encode_moves};
use crate::types::GameId;

/// One parsed transcript: its corpus id, its moves in play order, and the
/// opaque metadata header kept for final emission.
///
/// Games are created once at parse time and never mutated; transform and
/// shift operations always produce new derived move lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    header: String,
    moves: Vec<Move>,
}

impl Game {
    pub fn new(id: GameId, header: String, moves: Vec<Move>) -> Self {
        Game { id, header, moves }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// The raw metadata header line, starting with `(`.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The first `limit` moves, or all of them when no limit is set.
    ///
    /// Truncation happens strictly before any canonicalization: bounding
    /// boxes and keys are computed on the truncated list only.
    pub fn truncated(&self, limit: Option<usize>) -> &[Move] {
        match limit {
            Some(n) if n < self.moves.len() => &self.moves[..n],
            _ => &self.moves,
        }
    }

    /// Re-serialize the (possibly truncated) move list as a transcript
    /// body: `;B[aa];W[bb])`. Together with the header this reconstructs
    /// an emittable transcript.
    pub fn transcript_body(&self, limit: Option<usize>) -> String {
        format!(";{})", encode_moves(self.truncated(limit)))
    }
}
