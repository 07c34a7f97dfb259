//! Board-level test suites.
//!
//! - `perft` - move generation node counts
//! - `make_unmake` - state restoration, null moves, en-passant, castling
//! - `zobrist` - key stability and incremental-update consistency
//! - `draw` - repetition and fifty-move handling
//! - `proptest` - randomized make/undo and key invariants

mod make_unmake;
