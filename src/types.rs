//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a game within a parsed corpus.
///
/// Ids are dense sequence indices assigned at parse time and never reused;
/// the deduplication index and the subset detector refer to games only
/// through these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(usize);

impl GameId {
    /// Create a new game id from a corpus sequence index.
    pub fn new(index: usize) -> Self {
        GameId(index)
    }

    /// Get the inner index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<GameId> for usize {
    fn from(id: GameId) -> Self {
        id.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A deterministic serialization of a (possibly shifted and transformed)
/// move list, used purely for equality and hash comparison.
///
/// Keys are never decoded back into moves. Ordering is byte-wise
/// lexicographic on the serialized text, which makes the tie-break among
/// equivalent encodings total and reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Wrap an already-serialized move list.
    pub fn new(encoded: impl Into<String>) -> Self {
        CanonicalKey(encoded.into())
    }

    /// The key of the empty move list.
    pub fn empty() -> Self {
        CanonicalKey(String::new())
    }

    /// Get the serialized form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty-game key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
