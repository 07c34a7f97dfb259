//! Castling-rights bits and the per-square update table.

/// White kingside castling right.
pub(crate) const WHITE_SHORT: u8 = 1;
/// White queenside castling right.
pub(crate) const WHITE_LONG: u8 = 2;
/// Black kingside castling right.
pub(crate) const BLACK_SHORT: u8 = 4;
/// Black queenside castling right.
pub(crate) const BLACK_LONG: u8 = 8;

/// Rights kept after a move touches the indexed square.
///
/// Any move from or to a king or rook home square ANDs the rights with the
/// corresponding entry; every other square leaves them untouched (15).
#[rustfmt::skip]
pub(crate) const CASTLING_UPDATE: [u8; 64] = [
    13, 15, 15, 15, 12, 15, 15, 14,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
     7, 15, 15, 15,  3, 15, 15, 11,
];
