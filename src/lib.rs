//! gosieve - symmetry-aware deduplication of Go game transcripts
//!
//! This crate provides:
//! - A 19x19 board model with validated coordinates and colored moves
//! - The 8-element dihedral symmetry group acting on move lists
//! - Bounding-box computation and rigid-translation enumeration
//! - Canonical-key construction and a first-seen-wins dedup index
//! - Subset-relation reduction over color-agnostic stone sets
//! - A corpus parser, extraction pipeline, and CLI front end

pub mod cli;
pub mod corpus;
pub mod dedup;
pub mod error;
pub mod goban;
pub mod pipeline;
pub mod types;

pub use corpus::{Game, ParsedCorpus, parse_corpus};
pub use dedup::{DedupIndex, KeyOptions, StonePositionSet, canonical_form, canonical_keys, dominated_flags};
pub use error::{Error, Result};
pub use goban::{BoundingBox, Color, Coord, Move, ShiftOffset, Symmetry};
pub use pipeline::{ExtractOptions, ExtractPipeline, ExtractReport, Extraction};
pub use types::{CanonicalKey, GameId};
