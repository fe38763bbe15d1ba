//! Canonical key construction
//!
//! A game's key space is the cross-product of its admissible shifts and
//! the enabled symmetry elements, each serialized as semicolon-joined
//! token text. Registering one game's keys and probing another's against
//! them detects equivalence under any enabled shift-plus-transform without
//! comparing move lists directly.

use crate::error::Result;
use crate::goban::{BoundingBox, Move, ShiftOffset, Symmetry, encode_moves, shift_moves};
use crate::types::CanonicalKey;

/// Which parts of the equivalence group are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    /// Include all 8 board symmetries (otherwise only the identity).
    pub symmetry: bool,
    /// Include every admissible one-point translation (otherwise only the
    /// zero offset).
    pub shift: bool,
}

impl Default for KeyOptions {
    fn default() -> Self {
        KeyOptions {
            symmetry: true,
            shift: true,
        }
    }
}

const IDENTITY_ONLY: [Symmetry; 1] = [Symmetry::Identity];

impl KeyOptions {
    fn symmetries(&self) -> &'static [Symmetry] {
        if self.symmetry {
            &Symmetry::ALL
        } else {
            &IDENTITY_ONLY
        }
    }
}

fn encode(moves: &[Move]) -> CanonicalKey {
    CanonicalKey::new(encode_moves(moves))
}

/// Build every canonical key of a move list under the enabled options:
/// shift first, then transform, then serialize.
///
/// The full cross-product is returned (up to 9 shifts x 8 transforms = 72
/// keys) without self-deduplication; the caller registers them all. An
/// empty move list has exactly one key, the empty one.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] only if the shift arithmetic is
/// inconsistent with the bounds check, which indicates an internal logic
/// bug rather than bad input.
pub fn canonical_keys(moves: &[Move], options: KeyOptions) -> Result<Vec<CanonicalKey>> {
    if moves.is_empty() {
        return Ok(vec![CanonicalKey::empty()]);
    }

    let offsets = if options.shift {
        BoundingBox::of(moves)?.admissible_shifts()
    } else {
        vec![ShiftOffset::ZERO]
    };
    let symmetries = options.symmetries();

    let mut keys = Vec::with_capacity(offsets.len() * symmetries.len());
    for offset in offsets {
        let shifted = shift_moves(moves, offset)?;
        for sym in symmetries {
            keys.push(encode(&sym.apply_moves(&shifted)));
        }
    }
    Ok(keys)
}

/// The single canonical representative of a move list: the byte-wise
/// smallest of its 8 un-shifted transform encodings.
///
/// The order is total and deterministic, so the representative is stable
/// across runs regardless of container iteration order.
pub fn canonical_form(moves: &[Move]) -> CanonicalKey {
    Symmetry::ALL
        .iter()
        .map(|sym| encode(&sym.apply_moves(moves)))
        .min()
        .unwrap_or_else(CanonicalKey::empty)
}
