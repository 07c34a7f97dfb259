//! A UCI chess engine.
//!
//! Bitboard board representation with magic-bitboard move generation, a
//! tapered hand-crafted evaluation backed by a pawn hash, and an
//! iterative-deepening alpha-beta search with a transposition table,
//! quiescence, null-move pruning and killer/history move ordering.
//!
//! # Quick start
//!
//! ```
//! use castellan::board::Position;
//! use castellan::search::{find_best_move, SearchLimits, SearchTables};
//!
//! let mut pos = Position::new();
//! let mut tables = SearchTables::new(16);
//! let limits = SearchLimits::depth(4);
//! let best = find_best_move(&mut pos, &mut tables, &limits, |_| {});
//! assert!(best.is_some());
//! ```
//!
//! # Features
//!
//! - `serde` - serialization derives for `Piece`, `Color`, `Square`, `Move`
//! - `logging` - debug diagnostics via the `log` crate

#![warn(clippy::pedantic)]
// Bit patterns read better without digit separators.
#![allow(clippy::unreadable_literal)]
// Chess code is full of intentionally similar names (wtime/btime, mg/eg).
#![allow(clippy::similar_names)]
// Square and table indices are ubiquitous, small and in range.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod search;
pub mod sync;
pub mod time;
pub mod tt;
pub mod uci;

pub(crate) mod pawn_hash;
pub(crate) mod zobrist;

/// Build every process-wide table (attacks, magics, Zobrist keys) up
/// front. The tables are lazily initialized anyway; calling this once at
/// startup just moves the cost out of the first search.
pub fn init() {
    board::attack_tables::init();
    once_cell::sync::Lazy::force(&zobrist::ZOBRIST);
}
