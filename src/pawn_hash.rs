//! Pawn-structure cache keyed by the pawns-only Zobrist hash.
//!
//! Pawn structure changes far less often than the rest of the position, so
//! the expensive structure scan is cached in a small always-replace table.

use crate::board::Bitboard;

const PAWN_HASH_ENTRIES: usize = 65_536;

/// Everything the evaluation wants to know about the pawn structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PawnsInfo {
    /// Passed pawn locations per side.
    pub passed_pawns: [Bitboard; 2],
    /// Squares attacked by each side's pawns.
    pub pawn_targets: [Bitboard; 2],
    pub number_of_pawns: [i32; 2],
    /// King-safety subtotals for a king castled short.
    pub king_wing_safety: [i32; 2],
    /// King-safety subtotals for a king castled long.
    pub queen_wing_safety: [i32; 2],
    /// Structure score from white's point of view.
    pub score: i32,
}

#[derive(Clone, Copy, Default)]
struct PawnHashEntry {
    key: u64,
    info: PawnsInfo,
}

pub(crate) struct PawnHashTable {
    entries: Vec<PawnHashEntry>,
}

impl PawnHashTable {
    pub fn new() -> Self {
        PawnHashTable {
            entries: vec![PawnHashEntry::default(); PAWN_HASH_ENTRIES],
        }
    }

    /// Look up a pawn structure by its key. Zobrist keys are never zero, so
    /// empty slots cannot produce a false hit.
    pub fn probe(&self, key: u64) -> Option<PawnsInfo> {
        let entry = &self.entries[key as usize % self.entries.len()];
        if entry.key == key {
            Some(entry.info)
        } else {
            None
        }
    }

    /// Store a pawn structure, replacing whatever occupied the slot.
    pub fn store(&mut self, key: u64, info: PawnsInfo) {
        let len = self.entries.len();
        self.entries[key as usize % len] = PawnHashEntry { key, info };
    }
}

impl Default for PawnHashTable {
    fn default() -> Self {
        PawnHashTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_miss_on_empty_table() {
        let table = PawnHashTable::new();
        assert_eq!(table.probe(0x2000_0000_0000_0001), None);
    }

    #[test]
    fn test_store_then_probe() {
        let mut table = PawnHashTable::new();
        let key = 0x2000_0000_0000_abcd;
        let info = PawnsInfo {
            number_of_pawns: [8, 8],
            score: 42,
            ..PawnsInfo::default()
        };
        table.store(key, info);
        assert_eq!(table.probe(key), Some(info));
    }

    #[test]
    fn test_colliding_key_replaces() {
        let mut table = PawnHashTable::new();
        let key_a = 0x2000_0000_0000_0001;
        let key_b = key_a + PAWN_HASH_ENTRIES as u64; // same slot
        table.store(key_a, PawnsInfo { score: 1, ..PawnsInfo::default() });
        table.store(key_b, PawnsInfo { score: 2, ..PawnsInfo::default() });
        assert_eq!(table.probe(key_a), None);
        assert_eq!(table.probe(key_b).unwrap().score, 2);
    }
}
