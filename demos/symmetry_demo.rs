//! Demonstration of board symmetry operations on game transcripts
//!
//! This example shows:
//! - All 8 symmetries applied to a small position
//! - Bounding-box computation and admissible shift enumeration
//! - Canonical key construction and the tie-break rule

use gosieve::dedup::{KeyOptions, canonical_form, canonical_keys};
use gosieve::goban::{BoundingBox, Move, Symmetry, diagram};

fn main() {
    let moves: Vec<Move> = "B[dc];W[qd];B[cq]"
        .split(';')
        .map(|t| Move::parse(t).expect("demo tokens are well-formed"))
        .collect();

    println!("ORIGINAL POSITION");
    println!("-----------------");
    print!("{}", diagram(&moves));
    println!();

    println!("THE 8 SYMMETRIES");
    println!("----------------");
    for sym in Symmetry::ALL {
        let variant = sym.apply_moves(&moves);
        let tokens: Vec<String> = variant.iter().map(|mv| mv.to_string()).collect();
        println!("{:>14?}: {}", sym, tokens.join(";"));
    }
    println!();

    println!("SHIFT ENUMERATION");
    println!("-----------------");
    let bbox = BoundingBox::of(&moves).expect("demo position is non-empty");
    println!(
        "bounding box: x in [{}, {}], y in [{}, {}]",
        bbox.left, bbox.right, bbox.top, bbox.bottom
    );
    for offset in bbox.admissible_shifts() {
        println!("  admissible offset: ({:+}, {:+})", offset.dx, offset.dy);
    }
    println!();

    println!("CANONICAL KEYS");
    println!("--------------");
    let keys = canonical_keys(&moves, KeyOptions::default()).expect("canonicalization succeeds");
    println!("key-space size (shifts x symmetries): {}", keys.len());
    println!("canonical representative: {}", canonical_form(&moves));
}
