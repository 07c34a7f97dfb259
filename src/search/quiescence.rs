//! Quiescence search: resolve captures and promotions before trusting the
//! static evaluation.

use crate::board::eval::pst::piece_value;
use crate::board::eval::{
    evaluate_material, evaluate_positional_factors, insufficient_material, DRAW_SCORE,
};
use crate::board::MoveList;

use super::{Searcher, MAX_DELTA, POSITIONAL_MARGIN, SAFETY_MARGIN, TIMEOUT_SCORE};

impl Searcher<'_> {
    /// Stand-pat quiescence with a lazy material-first evaluation and
    /// delta pruning. In check, all moves are generated instead of only
    /// the tactical ones.
    pub(crate) fn quiescence(&mut self, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if insufficient_material(self.pos) {
            return DRAW_SCORE;
        }

        // Material alone first; only pay for the positional terms when the
        // lazy margin cannot already refute the node.
        let mut stand_pat = evaluate_material(self.pos);
        if stand_pat >= beta + POSITIONAL_MARGIN {
            return beta;
        }
        stand_pat += evaluate_positional_factors(self.pos, self.pawn_hash);
        if stand_pat >= beta {
            return beta;
        }

        // No single move can recover more than a queen's worth.
        if stand_pat < alpha - MAX_DELTA {
            return alpha;
        }
        if alpha < stand_pat {
            alpha = stand_pat;
        }

        let mut list = MoveList::new();
        if self.pos.in_check() {
            self.pos.generate_moves(&mut list);
        } else {
            self.pos.generate_captures(&mut list);
            self.pos.generate_promotions(&mut list);
        }

        for i in 0..list.len() {
            let mv = list.pick_next(i);

            // Per-capture delta pruning: skip captures that cannot lift
            // alpha even with a safety margin on top of the victim.
            if mv.is_capture() {
                let captured_value = self.pos.piece_on(mv.to()).map_or(0, piece_value);
                if captured_value + SAFETY_MARGIN + stand_pat < alpha {
                    continue;
                }
            }

            if !self.pos.make_move(mv) {
                continue;
            }
            let score = -self.quiescence(-beta, -alpha);
            self.pos.undo_move();

            if self.nodes & 2047 == 0 && self.timed_out() {
                return TIMEOUT_SCORE;
            }

            if score > alpha {
                if score >= beta {
                    return beta;
                }
                alpha = score;
            }
        }

        alpha
    }
}
