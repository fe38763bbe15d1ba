//! Dihedral symmetry group of the board, used for canonicalization

use serde::{Deserialize, Serialize};

use super::coord::{Coord, MAX_COORD};
use super::moves::Move;

/// One of the 8 symmetries of a square grid: the identity, three
/// rotations, and four reflections.
///
/// Each element is a 2x2 integer matrix with entries in {-1, 0, 1}; a `-1`
/// entry reflects about 18 (`18 - v`, not `-v`) because the grid is
/// 0-indexed with size 19. The 8 elements form a group closed under
/// composition and inversion, so applying any of them to an on-board
/// coordinate always lands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rot90,
    /// Half turn.
    Rot180,
    /// Three-quarter turn clockwise.
    Rot270,
    /// Mirror across the vertical axis.
    FlipH,
    /// Mirror across the horizontal axis.
    FlipV,
    /// Mirror across the main diagonal (transpose).
    FlipDiag,
    /// Mirror across the anti-diagonal.
    FlipAntiDiag,
}

impl Symmetry {
    /// All 8 elements, identity first.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rot90,
        Symmetry::Rot180,
        Symmetry::Rot270,
        Symmetry::FlipH,
        Symmetry::FlipV,
        Symmetry::FlipDiag,
        Symmetry::FlipAntiDiag,
    ];

    /// The 2x2 matrix `[[a, b], [c, d]]` mapping `(x, y)` to
    /// `(a*x + b*y, c*x + d*y)`, with negated terms taken about 18.
    pub const fn matrix(self) -> [[i8; 2]; 2] {
        match self {
            Symmetry::Identity => [[1, 0], [0, 1]],
            Symmetry::Rot90 => [[0, -1], [1, 0]],
            Symmetry::Rot180 => [[-1, 0], [0, -1]],
            Symmetry::Rot270 => [[0, 1], [-1, 0]],
            Symmetry::FlipH => [[-1, 0], [0, 1]],
            Symmetry::FlipV => [[1, 0], [0, -1]],
            Symmetry::FlipDiag => [[0, 1], [1, 0]],
            Symmetry::FlipAntiDiag => [[0, -1], [-1, 0]],
        }
    }

    /// The inverse element. Rotations by 90 and 270 degrees invert each
    /// other; every other element is an involution.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rot90 => Symmetry::Rot270,
            Symmetry::Rot270 => Symmetry::Rot90,
            other => other,
        }
    }

    /// Apply this symmetry to a coordinate.
    ///
    /// Pure and total: the image of an on-board coordinate is always on
    /// the board, so no error case exists here. Exactly one of each matrix
    /// row is non-zero, which is what keeps the 8 maps distinct bijections.
    pub fn apply(self, coord: Coord) -> Coord {
        let [[a, b], [c, d]] = self.matrix();
        let (x, y) = (coord.x(), coord.y());

        let component = |from_x: i8, from_y: i8| -> u8 {
            if from_x != 0 {
                if from_x == 1 { x } else { MAX_COORD - x }
            } else if from_y == 1 {
                y
            } else {
                MAX_COORD - y
            }
        };

        Coord::new_unchecked(component(a, b), component(c, d))
    }

    /// Apply this symmetry element-wise to a move list, preserving order
    /// and color. A list is never transformed partially; all moves go
    /// through the same element.
    pub fn apply_moves(self, moves: &[Move]) -> Vec<Move> {
        moves
            .iter()
            .map(|mv| Move::new(mv.color, self.apply(mv.coord)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn expected_images_of_a_generic_point() {
        let p = coord(1, 2);
        let expected = [
            (Symmetry::Identity, (1, 2)),
            (Symmetry::Rot90, (16, 1)),
            (Symmetry::Rot180, (17, 16)),
            (Symmetry::Rot270, (2, 17)),
            (Symmetry::FlipH, (17, 2)),
            (Symmetry::FlipV, (1, 16)),
            (Symmetry::FlipDiag, (2, 1)),
            (Symmetry::FlipAntiDiag, (16, 17)),
        ];
        for (sym, (x, y)) in expected {
            let image = sym.apply(p);
            assert_eq!((i32::from(image.x()), i32::from(image.y())), (x, y), "{sym:?}");
        }
    }

    #[test]
    fn all_eight_elements_are_distinct() {
        // A generic off-axis point separates every element of the group.
        let p = coord(1, 2);
        let mut images: Vec<Coord> = Symmetry::ALL.iter().map(|s| s.apply(p)).collect();
        images.sort();
        images.dedup();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn inverse_undoes_apply_everywhere() {
        for sym in Symmetry::ALL {
            for x in 0..19 {
                for y in 0..19 {
                    let p = coord(x, y);
                    assert_eq!(sym.inverse().apply(sym.apply(p)), p);
                }
            }
        }
    }

    #[test]
    fn apply_moves_preserves_order_and_color() {
        let moves = vec![
            Move::parse("B[aa]").unwrap(),
            Move::parse("W[sa]").unwrap(),
            Move::parse("B[jj]").unwrap(),
        ];
        let rotated = Symmetry::Rot180.apply_moves(&moves);
        assert_eq!(rotated.len(), 3);
        assert_eq!(rotated[0].color, moves[0].color);
        assert_eq!(rotated[1].color, moves[1].color);
        assert_eq!(rotated[0].coord.to_string(), "ss");
        assert_eq!(rotated[1].coord.to_string(), "as");
        assert_eq!(rotated[2].coord.to_string(), "jj");
    }
}
