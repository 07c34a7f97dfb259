//! Piece values and piece-square tables.
//!
//! Table layout is a1..h1, a2..h2, ..., a8..h8 from white's point of view;
//! black uses the vertically mirrored square.

use crate::board::types::square::mirror_index;
use crate::board::types::{Color, Piece};

// Piece values in centipawns.
pub(crate) const PAWN_VALUE: i32 = 100;
pub(crate) const KNIGHT_VALUE: i32 = 310;
pub(crate) const BISHOP_VALUE: i32 = 320;
pub(crate) const ROOK_VALUE: i32 = 500;
pub(crate) const QUEEN_VALUE: i32 = 900;
pub(crate) const KING_VALUE: i32 = 20_000;

/// Non-king material both sides start with, for phase computation.
pub(crate) const INITIAL_MATERIAL: i32 =
    16 * PAWN_VALUE + 4 * (KNIGHT_VALUE + BISHOP_VALUE + ROOK_VALUE) + 2 * QUEEN_VALUE;

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-15, -5,  5,
     0,  0,  0, 25, 25,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    20, 30, 30, 35, 35, 30, 30, 20,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  5, 10, 10,  5,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 15, 15, 15, 15, 15, 15,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
pub(crate) const KING_TABLE_MIDDLEGAME: [i32; 64] = [
     15, 30, 10, -5, -5, 10, 40, 15,
     20, 20,  0,-10,-10,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

#[rustfmt::skip]
pub(crate) const KING_TABLE_ENDGAME: [i32; 64] = [
    -50,-30,-30,-30,-30,-30,-30,-50,
    -30,-20,  0,  0,  0,  0,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Bare material value of a piece.
#[inline]
pub(crate) const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::Pawn => PAWN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// Material value plus the piece-square bonus for the given location.
///
/// The king contributes its bare value only; its placement is scored by the
/// phase-interpolated king tables during evaluation.
#[inline]
pub(crate) fn piece_value_on(piece: Piece, square: usize, side: Color) -> i32 {
    let sq = if side == Color::White {
        square
    } else {
        mirror_index(square)
    };
    match piece {
        Piece::Knight => KNIGHT_VALUE + KNIGHT_TABLE[sq],
        Piece::Bishop => BISHOP_VALUE + BISHOP_TABLE[sq],
        Piece::Rook => ROOK_VALUE + ROOK_TABLE[sq],
        Piece::Queen => QUEEN_VALUE + QUEEN_TABLE[sq],
        Piece::Pawn => PAWN_VALUE + PAWN_TABLE[sq],
        Piece::King => KING_VALUE,
    }
}
