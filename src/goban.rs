//! 19x19 board model: coordinates, moves, symmetries, and bounding boxes

pub mod bounds;
pub mod coord;
pub mod moves;
pub mod symmetry;

pub use bounds::{BoundingBox, ShiftOffset, shift_moves};
pub use coord::{BOARD_SIZE, Coord, MAX_COORD};
pub use moves::{Color, Move, diagram, encode_moves};
pub use symmetry::Symmetry;
