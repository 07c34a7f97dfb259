//! Transposition table.
//!
//! A flat always-replace table indexed by `key % capacity`. Collisions are
//! tolerated because a probe only acts on an exact 64-bit key match; there
//! is no checksum beyond the key itself.

use crate::board::Move;

pub(crate) const MIN_HASH_SIZE_MB: usize = 1;
pub(crate) const MAX_HASH_SIZE_MB: usize = 1024;
pub(crate) const DEFAULT_HASH_SIZE_MB: usize = 128;

/// How a stored score relates to the window it was searched with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeType {
    /// The score is exact.
    Exact,
    /// The score failed low: at most `alpha` at store time.
    Alpha,
    /// The score failed high: at least `beta` at store time.
    Beta,
}

#[derive(Clone, Copy)]
struct HashEntry {
    zobrist_key: u64,
    best_move: Move,
    score: i32,
    depth: i32,
    node_type: NodeType,
}

impl Default for HashEntry {
    fn default() -> Self {
        HashEntry {
            zobrist_key: 0,
            best_move: Move::NULL,
            score: 0,
            depth: 0,
            node_type: NodeType::Exact,
        }
    }
}

pub struct TranspositionTable {
    entries: Vec<HashEntry>,
}

impl TranspositionTable {
    /// Allocate a table of roughly `size_mb` megabytes, clamped to the UCI
    /// option bounds.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let size_mb = size_mb.clamp(MIN_HASH_SIZE_MB, MAX_HASH_SIZE_MB);
        let num_entries = size_mb * 0x0010_0000 / std::mem::size_of::<HashEntry>();
        TranspositionTable {
            entries: vec![HashEntry::default(); num_entries],
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Store an entry, replacing whatever occupies the slot.
    pub(crate) fn store(
        &mut self,
        key: u64,
        best_move: Move,
        score: i32,
        depth: i32,
        node_type: NodeType,
    ) {
        let index = self.index(key);
        self.entries[index] = HashEntry {
            zobrist_key: key,
            best_move,
            score,
            depth,
            node_type,
        };
    }

    /// Probe for a score cutoff and the stored best move.
    ///
    /// On a key match the stored move is returned regardless of depth; a
    /// score comes back only when the entry was searched at least as deep
    /// as the current node and its bound applies to the given window.
    pub(crate) fn probe(&self, key: u64, depth: i32, alpha: i32, beta: i32) -> (Move, Option<i32>) {
        let entry = &self.entries[self.index(key)];
        if entry.zobrist_key != key {
            return (Move::NULL, None);
        }
        let score = if entry.depth >= depth {
            match entry.node_type {
                NodeType::Exact => Some(entry.score),
                NodeType::Alpha if entry.score <= alpha => Some(alpha),
                NodeType::Beta if entry.score >= beta => Some(beta),
                _ => None,
            }
        } else {
            None
        };
        (entry.best_move, score)
    }

    /// The stored best move for a position, if the slot still holds it.
    /// Used to walk the principal variation.
    pub(crate) fn probe_move(&self, key: u64) -> Move {
        let entry = &self.entries[self.index(key)];
        if entry.zobrist_key == key {
            entry.best_move
        } else {
            Move::NULL
        }
    }
}
