//! Transposition table keyed by Zobrist hash.
//!
//! Entries are never verified against the full position, so two positions
//! sharing a hash share an entry. The search clears the table once it grows
//! past its configured entry limit.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    stats: TtStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry. Statistics are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    pub fn probe(&mut self, key: u64) -> Option<TtEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(&key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Last write wins.
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        self.stats.stores += 1;
        self.entries.insert(key, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: i32, depth: u8) -> TtEntry {
        TtEntry {
            score,
            depth,
            bound: Bound::Exact,
        }
    }

    #[test]
    fn store_then_probe_round_trips_and_counts() {
        let mut table = TranspositionTable::new();
        assert_eq!(table.probe(42), None);

        table.store(42, entry(17, 3));
        assert_eq!(table.probe(42), Some(entry(17, 3)));
        assert_eq!(table.len(), 1);

        let stats = table.stats();
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.stores, 1);
    }

    #[test]
    fn later_store_replaces_entry() {
        let mut table = TranspositionTable::new();
        table.store(7, entry(1, 5));
        table.store(7, entry(-3, 1));
        assert_eq!(table.probe(7), Some(entry(-3, 1)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn clear_empties_table() {
        let mut table = TranspositionTable::new();
        for key in 0..10 {
            table.store(key, entry(0, 0));
        }
        assert_eq!(table.len(), 10);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.stats().stores, 10);
    }
}
