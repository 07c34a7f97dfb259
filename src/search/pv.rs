//! Principal variation extraction from the transposition table.

use super::{Searcher, PV_MAX_LENGTH};

impl Searcher<'_> {
    /// Walk the table from the current position, replaying each stored
    /// best move, until the chain breaks or the depth bound is reached.
    /// The moves are undone before returning.
    ///
    /// A stored move the position rejects ends the walk early; that can
    /// only shorten the reported line.
    pub(crate) fn load_pv_line(&mut self, depth: i32) {
        self.pv.clear();
        let limit = (depth.max(0) as usize).min(PV_MAX_LENGTH);

        while self.pv.len() < limit {
            let mv = self.tt.probe_move(self.pos.position_key());
            if mv.is_null() || !self.pos.make_move(mv) {
                break;
            }
            self.pv.push(mv);
        }

        for _ in 0..self.pv.len() {
            self.pos.undo_move();
        }
    }
}
