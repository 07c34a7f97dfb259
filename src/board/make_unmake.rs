//! Making and unmaking moves, attack queries, repetition and endgame tests.

use crate::zobrist::{piece_key, ZOBRIST};

use super::attack_tables::{bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::eval::pst::{piece_value_on, KING_VALUE, QUEEN_VALUE};
use super::state::HistoryEntry;
use super::types::bitboard::{bit_scan_forward, clear_bit, set_bit};
use super::types::castling::{BLACK_LONG, BLACK_SHORT, CASTLING_UPDATE, WHITE_LONG, WHITE_SHORT};
use super::types::{Color, Move, Piece};
use super::Position;

impl Position {
    /// Apply a move, updating bitboards, mailbox, material and both Zobrist
    /// keys incrementally.
    ///
    /// Returns `false` and restores the previous state when the move is
    /// illegal: the mover's king would be left in check, or a castling move
    /// violates its preconditions (right lost, king's path attacked, or the
    /// queenside knight square occupied).
    pub fn make_move(&mut self, mv: Move) -> bool {
        let from = mv.from().index();
        let to = mv.to().index();

        let us = self.side_to_move;
        let them = us.opponent();
        let us_idx = us.index();
        let them_idx = them.index();

        let Some(moved_piece) = self.mailbox[from] else {
            // Nothing to move; a malformed move handed in from the outside.
            return false;
        };
        let mut captured_piece = self.mailbox[to];

        let mut entry = HistoryEntry {
            mv,
            position_key: self.position_key,
            pawns_key: self.pawns_key,
            fifty_count: self.fifty_count,
            castling_rights: self.castling_rights,
            enpassant_square: self.enpassant_square,
            captured_piece: None,
        };

        self.search_ply += 1;

        // Move the piece.
        self.material[us_idx] -= piece_value_on(moved_piece, from, us);
        self.material[us_idx] += piece_value_on(moved_piece, to, us);
        self.mailbox[from] = None;
        self.mailbox[to] = Some(moved_piece);
        clear_bit(&mut self.piece_bitboards[us_idx][moved_piece.index()], from);
        clear_bit(&mut self.occupied_squares[us_idx], from);
        set_bit(&mut self.piece_bitboards[us_idx][moved_piece.index()], to);
        set_bit(&mut self.occupied_squares[us_idx], to);
        self.position_key ^= piece_key(moved_piece, us, from);
        self.position_key ^= piece_key(moved_piece, us, to);

        if moved_piece == Piece::Pawn {
            self.fifty_count = -1;
            self.pawns_key ^= piece_key(Piece::Pawn, us, from);
            self.pawns_key ^= piece_key(Piece::Pawn, us, to);

            if let Some(promoted) = mv.promoted_piece() {
                self.mailbox[to] = Some(promoted);
                set_bit(&mut self.piece_bitboards[us_idx][promoted.index()], to);
                clear_bit(&mut self.piece_bitboards[us_idx][Piece::Pawn.index()], to);
                self.position_key ^= piece_key(Piece::Pawn, us, to);
                self.position_key ^= piece_key(promoted, us, to);
                self.pawns_key ^= piece_key(Piece::Pawn, us, to);
                self.material[us_idx] -= piece_value_on(Piece::Pawn, to, us);
                self.material[us_idx] += piece_value_on(promoted, to, us);
            }
        }

        if mv.is_capture() {
            let mut capture_square = to;
            if mv.is_en_passant() {
                captured_piece = Some(Piece::Pawn);
                capture_square = (to as i32 - 8 + us_idx as i32 * 16) as usize;
                self.mailbox[capture_square] = None;
            }
            if let Some(captured) = captured_piece {
                clear_bit(
                    &mut self.piece_bitboards[them_idx][captured.index()],
                    capture_square,
                );
                clear_bit(&mut self.occupied_squares[them_idx], capture_square);
                self.position_key ^= piece_key(captured, them, capture_square);
                self.fifty_count = -1;
                self.material[them_idx] -= piece_value_on(captured, capture_square, them);
                entry.captured_piece = Some(captured);
                if captured == Piece::Pawn {
                    self.pawns_key ^= piece_key(Piece::Pawn, them, capture_square);
                }
            }
        }

        self.record_history(entry);
        self.history_ply += 1;

        // Castling: move the rook and gather the legality conditions. The
        // king's crossing square must be safe; the extra queenside knight
        // square (B file) only needs to be empty.
        let mut illegal_castling = false;
        if mv.is_castling() {
            let (rook_from, rook_to, needed_right);
            if to < from {
                // Queenside.
                rook_from = to - 2;
                rook_to = to + 1;
                needed_right = if us == Color::White {
                    WHITE_LONG
                } else {
                    BLACK_LONG
                };
                if self.mailbox[rook_from + 1].is_some() {
                    illegal_castling = true;
                }
            } else {
                rook_from = to + 1;
                rook_to = to - 1;
                needed_right = if us == Color::White {
                    WHITE_SHORT
                } else {
                    BLACK_SHORT
                };
            }

            self.mailbox[rook_from] = None;
            self.mailbox[rook_to] = Some(Piece::Rook);
            clear_bit(&mut self.piece_bitboards[us_idx][Piece::Rook.index()], rook_from);
            clear_bit(&mut self.occupied_squares[us_idx], rook_from);
            self.position_key ^= piece_key(Piece::Rook, us, rook_from);
            set_bit(&mut self.piece_bitboards[us_idx][Piece::Rook.index()], rook_to);
            set_bit(&mut self.occupied_squares[us_idx], rook_to);
            self.position_key ^= piece_key(Piece::Rook, us, rook_to);
            self.material[us_idx] -= piece_value_on(Piece::Rook, rook_from, us);
            self.material[us_idx] += piece_value_on(Piece::Rook, rook_to, us);

            illegal_castling = illegal_castling
                || self.castling_rights & needed_right == 0
                || self.is_attacked(rook_to, them)
                || self.is_attacked(from, them);
        }

        let king_square = bit_scan_forward(self.piece_bitboard(us, Piece::King));

        self.side_to_move = them;
        self.fifty_count += 1;

        if self.is_attacked(king_square, them) || illegal_castling {
            self.undo_move();
            return false;
        }

        if let Some(ep) = self.enpassant_square {
            self.position_key ^= ZOBRIST.enpassant_file[ep.file()];
            self.enpassant_square = None;
        }
        if mv.is_double_pawn_push() {
            // The square behind the pawn; side to move is already flipped.
            let ep = (to as i32 + 8 - self.side_to_move.index() as i32 * 16) as usize;
            self.enpassant_square = Some(super::types::Square::from_index(ep));
            self.position_key ^= ZOBRIST.enpassant_file[ep & 7];
        }

        self.position_key ^= ZOBRIST.black_to_move;

        self.position_key ^= ZOBRIST.castling_rights[self.castling_rights as usize];
        self.castling_rights &= CASTLING_UPDATE[from] & CASTLING_UPDATE[to];
        self.position_key ^= ZOBRIST.castling_rights[self.castling_rights as usize];

        true
    }

    /// Take back the last move made.
    pub fn undo_move(&mut self) {
        self.search_ply -= 1;
        self.history_ply -= 1;

        let entry = self.history[self.history_ply].clone();
        self.fifty_count = entry.fifty_count;
        self.position_key = entry.position_key;
        self.pawns_key = entry.pawns_key;
        self.castling_rights = entry.castling_rights;
        self.enpassant_square = entry.enpassant_square;

        let mv = entry.mv;
        let from = mv.from().index();
        let to = mv.to().index();

        self.side_to_move = self.side_to_move.opponent();
        let us = self.side_to_move;
        let us_idx = us.index();
        let them = us.opponent();
        let them_idx = them.index();

        let moved_piece = self.mailbox[to].expect("undo_move: destination square empty");
        clear_bit(&mut self.piece_bitboards[us_idx][moved_piece.index()], to);
        clear_bit(&mut self.occupied_squares[us_idx], to);
        self.mailbox[to] = None;
        self.material[us_idx] -= piece_value_on(moved_piece, to, us);

        // A promoted piece goes back as a pawn.
        let restored_piece = if mv.is_promotion() {
            Piece::Pawn
        } else {
            moved_piece
        };
        self.material[us_idx] += piece_value_on(restored_piece, from, us);
        self.mailbox[from] = Some(restored_piece);
        set_bit(&mut self.piece_bitboards[us_idx][restored_piece.index()], from);
        set_bit(&mut self.occupied_squares[us_idx], from);

        if mv.is_capture() {
            if let Some(captured) = entry.captured_piece {
                // The en-passant victim sits behind the destination square.
                let capture_square = if mv.is_en_passant() {
                    (to as i32 - 8 + us_idx as i32 * 16) as usize
                } else {
                    to
                };
                set_bit(
                    &mut self.piece_bitboards[them_idx][captured.index()],
                    capture_square,
                );
                set_bit(&mut self.occupied_squares[them_idx], capture_square);
                self.mailbox[capture_square] = Some(captured);
                self.material[them_idx] += piece_value_on(captured, capture_square, them);
            }
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = if to < from {
                (to - 2, to + 1)
            } else {
                (to + 1, to - 1)
            };
            self.material[us_idx] += piece_value_on(Piece::Rook, rook_from, us);
            self.material[us_idx] -= piece_value_on(Piece::Rook, rook_to, us);
            self.mailbox[rook_from] = Some(Piece::Rook);
            self.mailbox[rook_to] = None;
            set_bit(&mut self.piece_bitboards[us_idx][Piece::Rook.index()], rook_from);
            set_bit(&mut self.occupied_squares[us_idx], rook_from);
            clear_bit(&mut self.piece_bitboards[us_idx][Piece::Rook.index()], rook_to);
            clear_bit(&mut self.occupied_squares[us_idx], rook_to);
        }
    }

    /// Pass the move: toggle the side and clear the en-passant square.
    ///
    /// Only meaningful when the side to move is not in check; the search
    /// guards that.
    pub fn make_null_move(&mut self) {
        self.record_history(HistoryEntry {
            mv: Move::NULL,
            position_key: self.position_key,
            pawns_key: self.pawns_key,
            fifty_count: self.fifty_count,
            castling_rights: self.castling_rights,
            enpassant_square: self.enpassant_square,
            captured_piece: None,
        });

        if let Some(ep) = self.enpassant_square {
            self.position_key ^= ZOBRIST.enpassant_file[ep.file()];
            self.enpassant_square = None;
        }
        self.history_ply += 1;
        self.search_ply += 1;
        self.position_key ^= ZOBRIST.black_to_move;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Take back a null move.
    pub fn undo_null_move(&mut self) {
        self.history_ply -= 1;
        self.search_ply -= 1;
        let entry = &self.history[self.history_ply];
        self.position_key = entry.position_key;
        self.enpassant_square = entry.enpassant_square;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Is `square` attacked by any piece of color `by`?
    ///
    /// Computed with a super-piece on `square`: each attack set generated
    /// from the square is intersected with the matching attacker bitboard.
    #[must_use]
    pub fn is_attacked(&self, square: usize, by: Color) -> bool {
        let occupied = self.occupancy();
        let not_by = by.opponent();

        KNIGHT_ATTACKS[square] & self.piece_bitboard(by, Piece::Knight) != 0
            || KING_ATTACKS[square] & self.piece_bitboard(by, Piece::King) != 0
            || PAWN_ATTACKS[not_by.index()][square] & self.piece_bitboard(by, Piece::Pawn) != 0
            || bishop_attacks(occupied, square)
                & (self.piece_bitboard(by, Piece::Bishop) | self.piece_bitboard(by, Piece::Queen))
                != 0
            || rook_attacks(occupied, square)
                & (self.piece_bitboard(by, Piece::Rook) | self.piece_bitboard(by, Piece::Queen))
                != 0
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn in_check(&self) -> bool {
        let king_square = bit_scan_forward(self.piece_bitboard(self.side_to_move, Piece::King));
        self.is_attacked(king_square, self.side_to_move.opponent())
    }

    /// Has the current position occurred before within the fifty-move
    /// window? The search treats a single prior occurrence as a draw at
    /// non-root nodes.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        let window = self.fifty_count.max(0) as usize;
        let start = self.history_ply.saturating_sub(window);
        self.history[start..self.history_ply]
            .iter()
            .any(|entry| entry.position_key == self.position_key)
    }

    /// Rough endgame test used to switch off null-move pruning and the
    /// tempo bonus. Only white's material is consulted.
    #[must_use]
    pub fn endgame(&self) -> bool {
        self.material[Color::White.index()] < QUEEN_VALUE + KING_VALUE
    }
}
