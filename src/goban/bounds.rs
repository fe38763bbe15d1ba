//! Bounding boxes and rigid-translation enumeration

use serde::{Deserialize, Serialize};

use super::coord::{Coord, MAX_COORD};
use super::moves::Move;

/// Minimal axis-aligned rectangle containing all of a move list's stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u8,
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
}

/// A rigid translation of a move list, one of the nine offsets in
/// `{-1, 0, 1}^2` that the bounding box admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftOffset {
    pub dx: i8,
    pub dy: i8,
}

impl ShiftOffset {
    pub const ZERO: ShiftOffset = ShiftOffset { dx: 0, dy: 0 };

    pub fn new(dx: i8, dy: i8) -> Self {
        ShiftOffset { dx, dy }
    }

    /// The offset undoing this one.
    pub fn negated(self) -> Self {
        ShiftOffset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl BoundingBox {
    /// Compute the occupied rectangle of a move list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyGame`] for an empty list; a box over
    /// zero stones has no meaningful extent and callers are expected to
    /// skip shift enumeration for such games.
    pub fn of(moves: &[Move]) -> Result<Self, crate::Error> {
        let mut stones = moves.iter().map(|mv| mv.coord);
        let first = stones.next().ok_or(crate::Error::EmptyGame)?;

        let mut bbox = BoundingBox {
            left: first.x(),
            top: first.y(),
            right: first.x(),
            bottom: first.y(),
        };
        for c in stones {
            bbox.left = bbox.left.min(c.x());
            bbox.right = bbox.right.max(c.x());
            bbox.top = bbox.top.min(c.y());
            bbox.bottom = bbox.bottom.max(c.y());
        }
        Ok(bbox)
    }

    /// Whether shifting the box by `offset` keeps it inside the board.
    pub fn admits(&self, offset: ShiftOffset) -> bool {
        let (dx, dy) = (i16::from(offset.dx), i16::from(offset.dy));
        let max = i16::from(MAX_COORD);
        i16::from(self.left) + dx >= 0
            && i16::from(self.right) + dx <= max
            && i16::from(self.top) + dy >= 0
            && i16::from(self.bottom) + dy <= max
    }

    /// Enumerate every offset in `{-1, 0, 1}^2` that keeps the box on the
    /// board. Always contains `(0, 0)`, since the box of validated
    /// coordinates fits by construction.
    pub fn admissible_shifts(&self) -> Vec<ShiftOffset> {
        let mut offsets = Vec::with_capacity(9);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let offset = ShiftOffset::new(dx, dy);
                if self.admits(offset) {
                    offsets.push(offset);
                }
            }
        }
        offsets
    }
}

/// Apply the same offset to every coordinate of a move list.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if any shifted coordinate leaves
/// the board. Offsets coming from [`BoundingBox::admissible_shifts`] never
/// trigger this; seeing the error there means the bounds arithmetic is
/// broken, and the caller should surface it rather than drop the game.
pub fn shift_moves(moves: &[Move], offset: ShiftOffset) -> Result<Vec<Move>, crate::Error> {
    moves
        .iter()
        .map(|mv| {
            let x = i32::from(mv.coord.x()) + i32::from(offset.dx);
            let y = i32::from(mv.coord.y()) + i32::from(offset.dy);
            Coord::new(x, y).map(|coord| Move::new(mv.color, coord))
        })
        .collect()
}
