//! FEN parsing and long-algebraic move parsing.

use std::str::FromStr;

use crate::zobrist::{piece_key, ZOBRIST};

use super::error::{FenError, MoveParseError};
use super::eval::pst::piece_value_on;
use super::state::HistoryEntry;
use super::types::bitboard::{population_count, set_bit};
use super::types::castling::{BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT};
use super::types::moves::{
    FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_PROMOTED_BISHOP,
    FLAG_PROMOTED_KNIGHT, FLAG_PROMOTED_QUEEN, FLAG_PROMOTED_ROOK,
};
use super::types::square::{file_to_index, rank_to_index};
use super::types::{Color, Move, Piece, Square};
use super::Position;

impl Position {
    /// Parse a position from standard six-field FEN notation.
    ///
    /// The halfmove clock and fullmove fields are optional. The fullmove
    /// field is stored directly into `history_ply`, which bounds the
    /// repetition scan; missing plies are padded with null history records.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let mut pos = Position::empty();

        // Piece placement, rank 8 down to rank 1.
        for (rank_index, rank_str) in parts[0].split('/').enumerate() {
            if rank_index >= 8 {
                return Err(FenError::TooManyRanks);
            }
            let rank = 7 - rank_index;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank });
                    }
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = rank * 8 + file;
                    set_bit(
                        &mut pos.piece_bitboards[color.index()][piece.index()],
                        square,
                    );
                    set_bit(&mut pos.occupied_squares[color.index()], square);
                    pos.mailbox[square] = Some(piece);
                    file += 1;
                }
            }
        }

        for color in Color::BOTH {
            if population_count(pos.piece_bitboard(color, Piece::King)) != 1 {
                return Err(FenError::MissingKing);
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => pos.castling_rights |= WHITE_SHORT,
                'Q' => pos.castling_rights |= WHITE_LONG,
                'k' => pos.castling_rights |= BLACK_SHORT,
                'q' => pos.castling_rights |= BLACK_LONG,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { flag: c }),
            }
        }

        pos.enpassant_square = match parts[3] {
            "-" => None,
            square => Some(Square::from_str(square).map_err(|_| FenError::InvalidEnPassant {
                found: square.to_string(),
            })?),
        };

        pos.fifty_count = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        pos.history_ply = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(0);
        pos.history
            .resize(pos.history_ply, HistoryEntry::default());

        pos.position_key = pos.compute_position_key();
        pos.pawns_key = pos.compute_pawns_key();
        pos.material = pos.compute_material();

        Ok(pos)
    }

    /// Emit the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_run = 0;
            for file in 0..8 {
                let square = Square::new(rank, file);
                match self.piece_on(square) {
                    Some(piece) => {
                        if empty_run > 0 {
                            row.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let color = self.color_on(square).unwrap_or(Color::White);
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                row.push_str(&empty_run.to_string());
            }
            placement.push(row);
        }

        let side = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };

        let mut castling = String::new();
        for (bit, flag) in [
            (WHITE_SHORT, 'K'),
            (WHITE_LONG, 'Q'),
            (BLACK_SHORT, 'k'),
            (BLACK_LONG, 'q'),
        ] {
            if self.castling_rights & bit != 0 {
                castling.push(flag);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let enpassant = self
            .enpassant_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            placement.join("/"),
            side,
            castling,
            enpassant,
            self.fifty_count,
            self.history_ply
        )
    }

    /// Recompute the position key from scratch.
    pub(crate) fn compute_position_key(&self) -> u64 {
        let mut key = ZOBRIST.castling_rights[self.castling_rights as usize];
        for square in 0..64 {
            if let Some(piece) = self.mailbox[square] {
                let color = self
                    .color_on(Square::from_index(square))
                    .expect("mailbox and occupancy agree");
                key ^= piece_key(piece, color, square);
            }
        }
        if let Some(ep) = self.enpassant_square {
            key ^= ZOBRIST.enpassant_file[ep.file()];
        }
        if self.side_to_move == Color::Black {
            key ^= ZOBRIST.black_to_move;
        }
        key
    }

    /// Recompute the pawns-only key from scratch.
    pub(crate) fn compute_pawns_key(&self) -> u64 {
        let mut key = 0;
        for square in 0..64 {
            if self.mailbox[square] == Some(Piece::Pawn) {
                let color = self
                    .color_on(Square::from_index(square))
                    .expect("mailbox and occupancy agree");
                key ^= piece_key(Piece::Pawn, color, square);
            }
        }
        key
    }

    /// Recompute the PST-inclusive material sums from scratch.
    pub(crate) fn compute_material(&self) -> [i32; 2] {
        let mut material = [0; 2];
        for square in 0..64 {
            if let Some(piece) = self.mailbox[square] {
                let color = self
                    .color_on(Square::from_index(square))
                    .expect("mailbox and occupancy agree");
                material[color.index()] += piece_value_on(piece, square, color);
            }
        }
        material
    }

    /// Parse a move in UCI long algebraic notation (`e2e4`, `e7e8q`).
    ///
    /// The move flags are derived from the board: double pawn pushes,
    /// castling, captures and en-passant are recognized from the moving
    /// piece and the target square. Legality is not checked here; an
    /// illegal move is rejected later by `make_move`.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from = rank_to_index(chars[1]) * 8 + file_to_index(chars[0]);
        let to = rank_to_index(chars[3]) * 8 + file_to_index(chars[2]);

        let moved_piece =
            self.mailbox[from].ok_or_else(|| MoveParseError::EmptyFromSquare {
                notation: uci.to_string(),
            })?;

        let mut flags = 0u32;

        if moved_piece == Piece::Pawn && (to as i32 - from as i32).abs() == 16 {
            flags |= FLAG_DOUBLE_PAWN_PUSH;
        }
        if moved_piece == Piece::King && (to as i32 - from as i32).abs() == 2 {
            flags |= FLAG_CASTLING;
        }
        if chars.len() == 5 {
            flags |= match chars[4] {
                'n' => FLAG_PROMOTED_KNIGHT,
                'b' => FLAG_PROMOTED_BISHOP,
                'r' => FLAG_PROMOTED_ROOK,
                'q' => FLAG_PROMOTED_QUEEN,
                other => return Err(MoveParseError::InvalidPromotion { piece: other }),
            };
        }
        if self.mailbox[to].is_some() {
            flags |= FLAG_CAPTURE;
        }
        if moved_piece == Piece::Pawn && self.enpassant_square.map(Square::index) == Some(to) {
            flags |= FLAG_EN_PASSANT;
        }

        Ok(Move::new(flags, from, to))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
