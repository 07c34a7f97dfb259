//! Zobrist hashing keys.
//!
//! Keys are drawn from a seeded generator so that independent runs of the
//! same build hash identical positions identically, which makes search
//! traces reproducible when debugging.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Piece};

const ZOBRIST_SEED: u64 = 3_596_592_594;

// All keys live in [2^61, 2^62), so a zeroed table entry can never collide
// with a real key.
const KEY_LOW: u64 = 1 << 61;
const KEY_HIGH: u64 = 1 << 62;

pub(crate) struct ZobristKeys {
    /// Per-(piece, color, square) keys, indexed `[piece + color * 6][square]`.
    pub pieces: [[u64; 64]; 12],
    /// Per-file en-passant keys.
    pub enpassant_file: [u64; 8],
    /// One key per castling-rights mask.
    pub castling_rights: [u64; 16],
    /// XORed in when black is to move.
    pub black_to_move: u64,
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut keys = ZobristKeys {
        pieces: [[0; 64]; 12],
        enpassant_file: [0; 8],
        castling_rights: [0; 16],
        black_to_move: 0,
    };
    for piece in keys.pieces.iter_mut() {
        for key in piece.iter_mut() {
            *key = rng.gen_range(KEY_LOW..KEY_HIGH);
        }
    }
    for key in keys.enpassant_file.iter_mut() {
        *key = rng.gen_range(KEY_LOW..KEY_HIGH);
    }
    for key in keys.castling_rights.iter_mut() {
        *key = rng.gen_range(KEY_LOW..KEY_HIGH);
    }
    keys.black_to_move = rng.gen_range(KEY_LOW..KEY_HIGH);
    keys
});

/// Key for a piece of the given color on the given square.
#[inline]
pub(crate) fn piece_key(piece: Piece, color: Color, square: usize) -> u64 {
    ZOBRIST.pieces[piece.index() + color.index() * 6][square]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_in_range_and_distinct() {
        let mut seen = HashSet::new();
        for piece_table in &ZOBRIST.pieces {
            for &key in piece_table {
                assert!((KEY_LOW..KEY_HIGH).contains(&key));
                assert!(seen.insert(key), "duplicate zobrist key");
            }
        }
        for &key in &ZOBRIST.enpassant_file {
            assert!(seen.insert(key));
        }
        for &key in &ZOBRIST.castling_rights {
            assert!(seen.insert(key));
        }
        assert!(seen.insert(ZOBRIST.black_to_move));
    }

    #[test]
    fn test_piece_key_indexing() {
        assert_eq!(
            piece_key(Piece::Knight, Color::White, 0),
            ZOBRIST.pieces[0][0]
        );
        assert_eq!(
            piece_key(Piece::Knight, Color::Black, 0),
            ZOBRIST.pieces[6][0]
        );
        assert_eq!(
            piece_key(Piece::King, Color::Black, 63),
            ZOBRIST.pieces[11][63]
        );
    }

    #[test]
    fn test_seeded_generation_is_stable_within_a_run() {
        let a = piece_key(Piece::Pawn, Color::White, 12);
        let b = piece_key(Piece::Pawn, Color::White, 12);
        assert_eq!(a, b);
    }
}
