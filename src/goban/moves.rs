//! Colored moves and their transcript encoding

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{BOARD_SIZE, Coord};

/// Stone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }
}

/// A labeled grid coordinate: one stone placement in a transcript.
///
/// Immutable once constructed. The play order of a move list is preserved
/// through every transform and shift, but carries no meaning for
/// equivalence beyond its appearance in the serialized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub color: Color,
    pub coord: Coord,
}

impl Move {
    pub fn new(color: Color, coord: Coord) -> Self {
        Move { color, coord }
    }

    /// Parse a transcript token of the form `B[xy]` or `W[xy]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedMove`] for a bad color letter,
    /// missing brackets, non-letter coordinates, or coordinates off the
    /// board. Pass moves (`B[]`) are rejected as well; this tool only deals
    /// in stone placements.
    pub fn parse(token: &str) -> Result<Self, crate::Error> {
        let malformed = |reason: &str| crate::Error::MalformedMove {
            token: token.to_string(),
            reason: reason.to_string(),
        };

        let chars: Vec<char> = token.trim().chars().collect();
        if chars.len() != 5 || chars[1] != '[' || chars[4] != ']' {
            return Err(malformed("expected <color>[<xy>]"));
        }

        let color = Color::from_char(chars[0]).ok_or_else(|| malformed("color must be B or W"))?;

        let (cx, cy) = (chars[2], chars[3]);
        if !cx.is_ascii_lowercase() || !cy.is_ascii_lowercase() {
            return Err(malformed("coordinates must be lowercase letters"));
        }

        let coord = Coord::from_letters(cx, cy).map_err(|_| {
            crate::Error::MalformedMove {
                token: token.to_string(),
                reason: format!("coordinate '{cx}{cy}' is off the 19x19 board"),
            }
        })?;

        Ok(Move { color, coord })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.color.to_char(), self.coord)
    }
}

/// Serialize a move list into its semicolon-joined token text.
///
/// This is the exact encoding used both for canonical keys and for
/// re-emitting survivors, so a key compares equal iff the serialized
/// transcripts would.
pub fn encode_moves(moves: &[Move]) -> String {
    let mut out = String::with_capacity(moves.len() * 6);
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push(mv.color.to_char());
        out.push('[');
        let [cx, cy] = mv.coord.letters();
        out.push(cx);
        out.push(cy);
        out.push(']');
    }
    out
}

/// Render a move list as a 19-line ASCII diagram: `X` black, `O` white,
/// `.` empty. A later stone at an occupied point overwrites the earlier
/// one, matching how the transcripts are treated elsewhere (no capture
/// logic).
pub fn diagram(moves: &[Move]) -> String {
    let size = usize::from(BOARD_SIZE);
    let mut grid = vec![vec!['.'; size]; size];
    for mv in moves {
        let glyph = match mv.color {
            Color::Black => 'X',
            Color::White => 'O',
        };
        grid[usize::from(mv.coord.y())][usize::from(mv.coord.x())] = glyph;
    }

    let mut out = String::with_capacity(size * (size + 1));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
