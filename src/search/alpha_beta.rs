//! The alpha-beta recursion.

use crate::board::eval::DRAW_SCORE;
use crate::board::{Move, MoveList};
use crate::tt::NodeType;

use super::{Searcher, KILLER_SCORE, MATE_SCORE, MAX_DEPTH, MAX_PLY, NULL_MOVE_REDUCTION, PV_SCORE, TIMEOUT_SCORE};

impl Searcher<'_> {
    /// Negamax with a principal-variation-search re-search scheme, null
    /// move pruning, a check extension and late move reductions.
    pub(crate) fn alpha_beta(
        &mut self,
        mut alpha: i32,
        beta: i32,
        mut depth: i32,
        null_move_pruning: bool,
    ) -> i32 {
        // Draw detection anywhere below the root.
        if self.pos.search_ply() > 0
            && (self.pos.fifty_count() >= 100 || self.pos.is_repetition())
        {
            return DRAW_SCORE;
        }

        // The table may cut this node off outright; either way it can seed
        // move ordering with the stored best move.
        let (pv_move, hash_score) = self.tt.probe(self.pos.position_key(), depth, alpha, beta);
        if let Some(score) = hash_score {
            return score;
        }

        if depth == 0 {
            return self.quiescence(alpha, beta);
        }

        let in_check = self.pos.in_check();
        if in_check {
            // Check extension.
            depth += 1;
        } else if null_move_pruning
            && self.pos.search_ply() > 0
            && depth > NULL_MOVE_REDUCTION
            && !self.pos.endgame()
        {
            // Null move: hand the opponent a free move; if the reduced
            // search still fails high, so would the real one. Disabled in
            // the endgame where zugzwang makes it unsound.
            self.pos.make_null_move();
            let score = -self.alpha_beta(
                -beta,
                -beta + 1,
                depth - NULL_MOVE_REDUCTION,
                false,
            );
            self.pos.undo_null_move();
            if score >= beta && score.abs() < MATE_SCORE - MAX_DEPTH {
                return beta;
            }
        }

        self.nodes += 1;

        let mut list = MoveList::new();
        self.pos.generate_moves(&mut list);

        // Ordering on top of the generation scores: the table move first,
        // then killers, then the history counters for quiets.
        let ply = self.pos.search_ply().min(MAX_PLY - 1);
        for i in 0..list.len() {
            let mv = list.get(i);
            if mv == pv_move {
                list.set_score(i, PV_SCORE);
            } else if mv == self.killers[0][ply] || mv == self.killers[1][ply] {
                list.set_score(i, KILLER_SCORE);
            } else {
                list.set_score(
                    i,
                    self.history[mv.from().index()][mv.to().index()] as u32,
                );
            }
        }

        let mut best_move = Move::NULL;
        let mut node_type = NodeType::Alpha;
        let mut best_score = i32::MIN;
        let mut legal_moves = 0;
        let mut searched_moves = 0;

        for i in 0..list.len() {
            let mv = list.pick_next(i);
            if !self.pos.make_move(mv) {
                continue;
            }
            legal_moves += 1;

            let score = if searched_moves == 0 {
                -self.alpha_beta(-beta, -alpha, depth - 1, true)
            } else {
                // Late quiet moves get a reduced zero-width probe; anything
                // that beats alpha is re-searched at full width and depth.
                let probe = if searched_moves >= 4 && !in_check && !mv.is_capture() && depth > 2
                {
                    -self.alpha_beta(-alpha - 1, -alpha, depth - 2, true)
                } else {
                    -self.alpha_beta(-alpha - 1, -alpha, depth - 1, true)
                };
                if probe > alpha {
                    -self.alpha_beta(-beta, -alpha, depth - 1, true)
                } else {
                    probe
                }
            };
            searched_moves += 1;
            self.pos.undo_move();

            if self.nodes & 2047 == 0 && self.timed_out() {
                return TIMEOUT_SCORE;
            }

            if score > best_score {
                best_move = mv;
                best_score = score;
                if score > alpha {
                    if score >= beta {
                        self.tt.store(
                            self.pos.position_key(),
                            best_move,
                            beta,
                            depth,
                            NodeType::Beta,
                        );
                        if !mv.is_capture() {
                            self.killers[1][ply] = self.killers[0][ply];
                            self.killers[0][ply] = mv;
                        }
                        return beta;
                    }
                    alpha = score;
                    node_type = NodeType::Exact;
                    if !mv.is_capture() {
                        self.history[mv.from().index()][mv.to().index()] += depth;
                    }
                }
            }
        }

        if legal_moves == 0 {
            // Mate scores carry the ply so nearer mates score higher.
            return if in_check {
                -MATE_SCORE + self.pos.search_ply() as i32
            } else {
                DRAW_SCORE
            };
        }

        self.tt.store(self.pos.position_key(), best_move, alpha, depth, node_type);
        alpha
    }
}
