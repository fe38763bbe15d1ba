//! First-seen-wins deduplication index

use std::collections::HashMap;

use crate::types::{CanonicalKey, GameId};

/// Mapping from canonical key to the game that first claimed it.
///
/// The representative order is kept in an explicit insertion-order list;
/// nothing here depends on hash-map iteration order, so results are
/// reproducible across runs.
#[derive(Debug, Default)]
pub struct DedupIndex {
    by_key: HashMap<CanonicalKey, GameId>,
    representatives: Vec<GameId>,
    duplicates: Vec<(GameId, GameId)>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The representative already holding any of these keys, if one exists.
    ///
    /// The first matching key decides; since keys are probed in the
    /// deterministic order the builder produced them, the answer is stable.
    pub fn find_duplicate(&self, keys: &[CanonicalKey]) -> Option<GameId> {
        keys.iter().find_map(|key| self.by_key.get(key).copied())
    }

    /// Whether any of these keys is already claimed.
    pub fn is_duplicate(&self, keys: &[CanonicalKey]) -> bool {
        self.find_duplicate(keys).is_some()
    }

    /// Register a new representative and claim all of its keys.
    ///
    /// A key already claimed by an earlier game stays with that game;
    /// first-seen always wins. (A game's own variant keys may collide with
    /// each other, e.g. for a symmetric position; the colliding entries
    /// are simply the same id.)
    pub fn register(&mut self, id: GameId, keys: Vec<CanonicalKey>) {
        for key in keys {
            self.by_key.entry(key).or_insert(id);
        }
        self.representatives.push(id);
    }

    /// Record that `id` duplicates the earlier `representative`.
    pub fn record_duplicate(&mut self, id: GameId, representative: GameId) {
        self.duplicates.push((id, representative));
    }

    /// The representative for a single key.
    pub fn representative_of(&self, key: &CanonicalKey) -> Option<GameId> {
        self.by_key.get(key).copied()
    }

    /// Representatives in first-seen order.
    pub fn representatives(&self) -> &[GameId] {
        &self.representatives
    }

    /// Recorded `(duplicate, representative)` pairs, in detection order.
    pub fn duplicates(&self) -> &[(GameId, GameId)] {
        &self.duplicates
    }

    /// Number of distinct equivalence classes seen so far.
    pub fn unique_count(&self) -> usize {
        self.representatives.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> CanonicalKey {
        CanonicalKey::new(text)
    }

    #[test]
    fn first_seen_wins() {
        let mut index = DedupIndex::new();
        let g0 = GameId::new(0);
        let g1 = GameId::new(1);

        index.register(g0, vec![key("a"), key("b")]);
        assert_eq!(index.find_duplicate(&[key("b"), key("c")]), Some(g0));

        // Overlapping registration does not steal the shared key.
        index.register(g1, vec![key("b"), key("c")]);
        assert_eq!(index.representative_of(&key("b")), Some(g0));
        assert_eq!(index.representative_of(&key("c")), Some(g1));
        assert_eq!(index.representatives(), &[g0, g1]);
    }

    #[test]
    fn disjoint_keys_are_not_duplicates() {
        let mut index = DedupIndex::new();
        index.register(GameId::new(0), vec![key("a")]);
        assert!(!index.is_duplicate(&[key("x"), key("y")]));
        assert_eq!(index.unique_count(), 1);
    }

    #[test]
    fn duplicate_records_keep_detection_order() {
        let mut index = DedupIndex::new();
        let (g0, g1, g2) = (GameId::new(0), GameId::new(1), GameId::new(2));
        index.register(g0, vec![key("a")]);
        index.record_duplicate(g1, g0);
        index.record_duplicate(g2, g0);
        assert_eq!(index.duplicates(), &[(g1, g0), (g2, g0)]);
    }
}
