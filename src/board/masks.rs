//! Precomputed masks: files, ranks, neighbor files, passed-pawn spans.

use once_cell::sync::Lazy;

use super::types::bitboard::{
    black_front_span, east_one, set_bit, west_one, white_front_span, Bitboard,
};
use super::types::Color;

/// One bitboard per file, a through h.
#[rustfmt::skip]
pub(crate) const FILES_BB: [Bitboard; 8] = [
    0x0101_0101_0101_0101,
    0x0202_0202_0202_0202,
    0x0404_0404_0404_0404,
    0x0808_0808_0808_0808,
    0x1010_1010_1010_1010,
    0x2020_2020_2020_2020,
    0x4040_4040_4040_4040,
    0x8080_8080_8080_8080,
];

/// One bitboard per rank, 1 through 8.
#[rustfmt::skip]
pub(crate) const RANKS_BB: [Bitboard; 8] = [
    0x0000_0000_0000_00ff,
    0x0000_0000_0000_ff00,
    0x0000_0000_00ff_0000,
    0x0000_0000_ff00_0000,
    0x0000_00ff_0000_0000,
    0x0000_ff00_0000_0000,
    0x00ff_0000_0000_0000,
    0xff00_0000_0000_0000,
];

/// The files adjacent to the indexed file, used for isolated-pawn detection.
#[rustfmt::skip]
pub(crate) const NEIGHBOR_FILES: [Bitboard; 8] = [
    0x0202_0202_0202_0202,
    0x0505_0505_0505_0505,
    0x0a0a_0a0a_0a0a_0a0a,
    0x1414_1414_1414_1414,
    0x2828_2828_2828_2828,
    0x5050_5050_5050_5050,
    0xa0a0_a0a0_a0a0_a0a0,
    0x4040_4040_4040_4040,
];

/// The three-file forward span a pawn must traverse unopposed to be passed.
///
/// Indexed `[color][square]`.
pub(crate) static PASSED_PAWN_MASK: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut masks = [[0u64; 64]; 2];
    for square in 0..64 {
        let mut square_bb: Bitboard = 0;
        set_bit(&mut square_bb, square);

        let white_span = white_front_span(square_bb);
        masks[Color::White.index()][square] =
            east_one(white_span) | west_one(white_span) | white_span;

        let black_span = black_front_span(square_bb);
        masks[Color::Black.index()][square] =
            east_one(black_span) | west_one(black_span) | black_span;
    }
    masks
});
