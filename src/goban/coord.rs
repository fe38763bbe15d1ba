//! Validated board coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: u8 = 19;

/// Largest valid coordinate component (the grid is 0-indexed).
pub const MAX_COORD: u8 = BOARD_SIZE - 1;

/// A point on the board.
///
/// Both components are validated into `[0, 18]` at construction; a `Coord`
/// that exists is always on the board. Out-of-range values are an error,
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, validating both components are on the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either component is outside
    /// `[0, 18]`.
    pub fn new(x: i32, y: i32) -> Result<Self, crate::Error> {
        let range = 0..=i32::from(MAX_COORD);
        if range.contains(&x) && range.contains(&y) {
            Ok(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(crate::Error::OutOfBounds { x, y })
        }
    }

    /// Construct without validation. Callers must guarantee both components
    /// are in `[0, 18]`; the symmetry engine uses this for transform images,
    /// which stay on the board whenever the input does.
    pub(crate) fn new_unchecked(x: u8, y: u8) -> Self {
        debug_assert!(x <= MAX_COORD && y <= MAX_COORD);
        Coord { x, y }
    }

    /// Parse a coordinate from the two lowercase letters of a move token,
    /// each mapping to 0-18 via `letter - 'a'`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either letter falls outside
    /// `'a'..='s'`.
    pub fn from_letters(cx: char, cy: char) -> Result<Self, crate::Error> {
        let value = |c: char| c as i32 - 'a' as i32;
        Coord::new(value(cx), value(cy))
    }

    /// Horizontal component.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Vertical component.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// The two-letter encoding used in transcripts.
    pub fn letters(&self) -> [char; 2] {
        [(b'a' + self.x) as char, (b'a' + self.y) as char]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [cx, cy] = self.letters();
        write!(f, "{cx}{cy}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_accepted() {
        assert!(Coord::new(0, 0).is_ok());
        assert!(Coord::new(18, 18).is_ok());
        assert!(Coord::new(9, 3).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        for (x, y) in [(-1, 0), (0, -1), (19, 0), (0, 19), (100, 100)] {
            let err = Coord::new(x, y).unwrap_err();
            assert!(matches!(err, crate::Error::OutOfBounds { .. }));
        }
    }

    #[test]
    fn letters_roundtrip() {
        let c = Coord::from_letters('q', 'd').unwrap();
        assert_eq!((c.x(), c.y()), (16, 3));
        assert_eq!(c.letters(), ['q', 'd']);
        assert_eq!(c.to_string(), "qd");
    }

    #[test]
    fn letters_out_of_range_rejected() {
        assert!(Coord::from_letters('t', 'a').is_err());
        assert!(Coord::from_letters('a', 'z').is_err());
    }

    #[test]
    fn ordering_is_x_then_y() {
        let a = Coord::new(1, 18).unwrap();
        let b = Coord::new(2, 0).unwrap();
        assert!(a < b);
    }
}
