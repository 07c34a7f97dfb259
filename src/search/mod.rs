//! Iterative-deepening alpha-beta search.
//!
//! The searcher threads the shared tables (transposition table, pawn hash)
//! through a context struct rather than globals, keeping the core
//! re-entrant and testable. Killer and history tables live for one search.

mod alpha_beta;
mod pv;
mod quiescence;

use std::time::Instant;

use crate::board::{Move, MoveList, Position};
use crate::pawn_hash::PawnHashTable;
use crate::sync::StopFlag;
use crate::time;
use crate::tt::TranspositionTable;

/// Mate scores are encoded as `MATE_SCORE - ply`, preferring faster mates.
pub const MATE_SCORE: i32 = 99_000;

/// Default and maximum iterative-deepening depth.
pub const MAX_DEPTH: i32 = 32;

/// Deepest ply the killer tables track.
pub(crate) const MAX_PLY: usize = 128;

/// Longest principal variation walked out of the transposition table.
pub(crate) const PV_MAX_LENGTH: usize = 32;

// Move ordering scores layered on top of the generation scores.
pub(crate) const PV_SCORE: u32 = 5000;
pub(crate) const KILLER_SCORE: u32 = 1024;

// Quiescence margins.
pub(crate) const POSITIONAL_MARGIN: i32 = 100;
pub(crate) const SAFETY_MARGIN: i32 = 200;
pub(crate) const MAX_DELTA: i32 = 900;

/// Null-move depth reduction.
pub(crate) const NULL_MOVE_REDUCTION: i32 = 2;

/// Sentinel propagated up the recursion when the clock or the stop flag
/// fires; the iteration observing it is discarded.
pub(crate) const TIMEOUT_SCORE: i32 = -1;

/// Shared state that survives across searches.
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub(crate) pawn_hash: PawnHashTable,
}

impl SearchTables {
    #[must_use]
    pub fn new(hash_mb: usize) -> Self {
        SearchTables {
            tt: TranspositionTable::new(hash_mb),
            pawn_hash: PawnHashTable::new(),
        }
    }
}

/// Limits for one search invocation.
pub struct SearchLimits {
    /// Maximum depth; 0 means "no depth limit" (the engine cap applies).
    pub depth: i32,
    pub time_to_search_ms: i64,
    pub start_time: Instant,
    pub stop: StopFlag,
}

impl SearchLimits {
    /// Fixed-depth limits with the infinite time budget.
    #[must_use]
    pub fn depth(depth: i32) -> Self {
        SearchLimits {
            depth,
            time_to_search_ms: time::MAX_TIME_TO_SEARCH_MS,
            start_time: Instant::now(),
            stop: StopFlag::new(),
        }
    }

    /// Timed limits with no depth cap.
    #[must_use]
    pub fn timed(time_to_search_ms: i64) -> Self {
        SearchLimits {
            depth: 0,
            time_to_search_ms,
            start_time: Instant::now(),
            stop: StopFlag::new(),
        }
    }
}

/// One completed deepening iteration, handed to the info callback.
#[derive(Debug, Clone)]
pub struct SearchIteration {
    pub depth: i32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: i64,
    pub pv: Vec<Move>,
}

/// Mate distance in full moves when the score encodes a mate, signed for
/// the winning side.
#[must_use]
pub fn mate_distance(score: i32) -> Option<i32> {
    if score.abs() >= MATE_SCORE - MAX_DEPTH {
        let moves = (MATE_SCORE - score.abs()) / 2 + 1;
        Some(if score > 0 { moves } else { -moves })
    } else {
        None
    }
}

pub(crate) struct Searcher<'a> {
    pub(crate) pos: &'a mut Position,
    pub(crate) tt: &'a mut TranspositionTable,
    pub(crate) pawn_hash: &'a mut PawnHashTable,
    pub(crate) limits: &'a SearchLimits,
    pub(crate) nodes: u64,
    pub(crate) killers: [[Move; MAX_PLY]; 2],
    pub(crate) history: [[i32; 64]; 64],
    pub(crate) pv: Vec<Move>,
}

impl<'a> Searcher<'a> {
    fn new(pos: &'a mut Position, tables: &'a mut SearchTables, limits: &'a SearchLimits) -> Self {
        Searcher {
            pos,
            tt: &mut tables.tt,
            pawn_hash: &mut tables.pawn_hash,
            limits,
            nodes: 0,
            killers: [[Move::NULL; MAX_PLY]; 2],
            history: [[0; 64]; 64],
            pv: Vec::with_capacity(PV_MAX_LENGTH),
        }
    }

    #[inline]
    pub(crate) fn timed_out(&self) -> bool {
        time::time_out(self.limits.start_time, self.limits.time_to_search_ms)
            || self.limits.stop.is_stopped()
    }
}

/// Search the position within the given limits and return the best move.
///
/// `on_iteration` fires after every completed deepening iteration with the
/// score, node count and principal variation; an iteration interrupted by
/// the clock or the stop flag is discarded and the previous result stands.
pub fn find_best_move<F>(
    pos: &mut Position,
    tables: &mut SearchTables,
    limits: &SearchLimits,
    mut on_iteration: F,
) -> Option<Move>
where
    F: FnMut(&SearchIteration),
{
    pos.reset_search_ply();

    let max_depth = if limits.depth <= 0 {
        MAX_DEPTH
    } else {
        limits.depth.min(MAX_DEPTH)
    };

    let alpha = -MATE_SCORE - 100;
    let beta = MATE_SCORE + 100;

    let mut searcher = Searcher::new(pos, tables, limits);
    let mut best_move = None;

    for current_depth in 1..=max_depth {
        let score = searcher.alpha_beta(alpha, beta, current_depth, true);

        // The iteration that hit the clock is incomplete; discard it.
        if searcher.timed_out() {
            break;
        }

        searcher.load_pv_line(current_depth);
        if let Some(&first) = searcher.pv.first() {
            best_move = Some(first);
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "depth {current_depth} score {score} nodes {} pv {:?}",
            searcher.nodes,
            searcher.pv
        );

        on_iteration(&SearchIteration {
            depth: current_depth,
            score,
            nodes: searcher.nodes,
            time_ms: limits.start_time.elapsed().as_millis() as i64,
            pv: searcher.pv.clone(),
        });

        if !time::time_for_next_iteration(limits.start_time, limits.time_to_search_ms) {
            break;
        }
    }

    best_move
}

/// Count the legal moves in a position; a convenience for callers that
/// need to know whether the game is over.
#[must_use]
pub fn legal_move_count(pos: &mut Position) -> usize {
    let mut list = MoveList::new();
    pos.generate_moves(&mut list);
    let mut count = 0;
    for i in 0..list.len() {
        let mv = list.get(i);
        if pos.make_move(mv) {
            count += 1;
            pos.undo_move();
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_distance_mapping() {
        assert_eq!(mate_distance(0), None);
        assert_eq!(mate_distance(500), None);
        // Mate delivered at ply 1: one full move.
        assert_eq!(mate_distance(MATE_SCORE - 1), Some(1));
        // Mate at ply 3: two full moves.
        assert_eq!(mate_distance(MATE_SCORE - 3), Some(2));
        // Getting mated reports negative.
        assert_eq!(mate_distance(-(MATE_SCORE - 2)), Some(-1));
    }

    #[test]
    fn test_legal_move_count_startpos() {
        let mut pos = Position::new();
        assert_eq!(legal_move_count(&mut pos), 20);
    }

    #[test]
    fn test_legal_move_count_checkmate() {
        let mut pos =
            Position::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
        assert_eq!(legal_move_count(&mut pos), 0);
    }
}
