//! Subset-relation reduction over color-agnostic stone sets
//!
//! A game whose stone positions form a proper subset of another surviving
//! game's positions is a shorter transcript of the same game and gets
//! dropped. Survivors form the maximal antichain of the corpus under set
//! inclusion.

use std::collections::BTreeSet;

use crate::goban::{Coord, Move};

/// The set of points a game occupies, colors discarded.
///
/// Backed by a `BTreeSet`, so iteration is sorted and the derived total
/// order is lexicographic over the sorted coordinate sequence; comparing
/// two sets is identical to comparing their serialized sorted-coordinate
/// text, never anything hash- or identity-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StonePositionSet {
    coords: BTreeSet<Coord>,
}

impl StonePositionSet {
    pub fn from_moves(moves: &[Move]) -> Self {
        StonePositionSet {
            coords: moves.iter().map(|mv| mv.coord).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Proper subset: every point of `self` is in `other` and `other` has
    /// strictly more points.
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.coords.len() < other.coords.len() && self.coords.is_subset(&other.coords)
    }

    /// Sorted-coordinate serialization, for diagnostics.
    pub fn fingerprint(&self) -> String {
        let mut out = String::with_capacity(self.coords.len() * 2);
        for c in &self.coords {
            let [cx, cy] = c.letters();
            out.push(cx);
            out.push(cy);
        }
        out
    }
}

/// Compute the dominated flag for every stone set.
///
/// Two deterministic passes in index order:
///
/// 1. Exact-set dedup: of any group of set-equal games, only the earliest
///    index survives.
/// 2. Strict-subset reduction over the remaining sets: for each pair the
///    proper subset is flagged. A set flagged dominated stops marking
///    others (its superset will dominate anything it would have) but its
///    flag is never unset.
///
/// Quadratic in the number of sets; fine for corpora of tens of thousands
/// of games, a hazard beyond that.
pub fn dominated_flags(sets: &[StonePositionSet]) -> Vec<bool> {
    let mut dominated = vec![false; sets.len()];

    // Pass 1: exact duplicates after color-agnostic flattening.
    for i in 0..sets.len() {
        if dominated[i] {
            continue;
        }
        for j in (i + 1)..sets.len() {
            if !dominated[j] && sets[i] == sets[j] {
                dominated[j] = true;
            }
        }
    }

    // Pass 2: strict subsets among the exact-distinct survivors.
    for i in 0..sets.len() {
        if dominated[i] {
            continue;
        }
        for j in (i + 1)..sets.len() {
            if dominated[j] {
                continue;
            }
            if sets[j].is_proper_subset_of(&sets[i]) {
                dominated[j] = true;
            } else if sets[i].is_proper_subset_of(&sets[j]) {
                dominated[i] = true;
                break;
            }
        }
    }

    dominated
}
