//! Canonicalization and equivalence detection across symmetry, shift, and
//! subset relations

pub mod index;
pub mod keys;
pub mod subset;

pub use index::DedupIndex;
pub use keys::{KeyOptions, canonical_form, canonical_keys};
pub use subset::{StonePositionSet, dominated_flags};
