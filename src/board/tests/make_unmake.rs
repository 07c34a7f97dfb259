//! Make/undo round trips for every special move type.

use crate::board::{MoveList, Position};

/// Snapshot the externally observable position state.
fn snapshot(pos: &Position) -> (String, u64, u64, [i32; 2], usize) {
    (
        pos.to_fen(),
        pos.position_key(),
        pos.pawns_key(),
        pos.material,
        pos.history_ply(),
    )
}

fn find_move(pos: &Position, uci: &str) -> crate::board::Move {
    let mut list = MoveList::new();
    pos.generate_moves(&mut list);
    *list
        .iter()
        .find(|m| m.to_string() == uci)
        .unwrap_or_else(|| panic!("move {uci} not generated"))
}

fn roundtrip(fen: &str, uci: &str) {
    let mut pos = Position::from_fen(fen).unwrap();
    let before = snapshot(&pos);
    let mv = find_move(&pos, uci);
    assert!(pos.make_move(mv), "{uci} should be legal in {fen}");
    assert_ne!(pos.position_key(), before.1, "key must change after {uci}");
    pos.undo_move();
    assert_eq!(snapshot(&pos), before, "round trip failed for {uci} in {fen}");
}

#[test]
fn test_quiet_and_capture_round_trip() {
    roundtrip("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "g1f3");
    roundtrip("rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR w KQkq e6 0 2", "d4e5");
}

#[test]
fn test_double_push_round_trip() {
    roundtrip("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "e2e4");
}

#[test]
fn test_en_passant_round_trip() {
    roundtrip(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "e5f6",
    );
    roundtrip(
        "rnbqkbnr/pppp1ppp/8/8/3pP3/8/PPP2PPP/RNBQKBNR b KQkq e3 0 3",
        "d4e3",
    );
}

#[test]
fn test_promotion_round_trips() {
    for promo in ["a7a8q", "a7a8r", "a7a8b", "a7a8n"] {
        roundtrip("8/P7/8/8/8/8/8/K1k5 w - - 0 1", promo);
    }
    // Capture promotion.
    roundtrip("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7b8q");
}

#[test]
fn test_castling_round_trips() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    roundtrip(fen, "e1g1");
    roundtrip(fen, "e1c1");
    let black = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1";
    roundtrip(black, "e8g8");
    roundtrip(black, "e8c8");
}

#[test]
fn test_castling_moves_the_rook() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_move(&pos, "e1g1");
    assert!(pos.make_move(mv));
    let fen = pos.to_fen();
    assert!(fen.starts_with("r3k2r/8/8/8/8/8/8/R4RK1"), "got {fen}");
}

#[test]
fn test_castling_rights_update_on_rook_moves() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_move(&pos, "h1g1");
    assert!(pos.make_move(mv));
    // White lost kingside only.
    assert_eq!(pos.castling_rights(), 0b1110);
    pos.undo_move();
    assert_eq!(pos.castling_rights(), 0b1111);

    // Capturing a rook removes the victim's right too.
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_move(&pos, "a1a8");
    assert!(pos.make_move(mv));
    assert_eq!(pos.castling_rights(), 0b0101);
}

#[test]
fn test_illegal_move_rejected_and_state_restored() {
    // White is in check; a move ignoring it must be rejected in place.
    let mut pos = Position::from_fen("4r1k1/8/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
    let before = snapshot(&pos);
    let mv = pos.parse_move("a2a3").unwrap();
    assert!(!pos.make_move(mv));
    assert_eq!(snapshot(&pos), before);
}

#[test]
fn test_castling_through_check_rejected() {
    // Black rook on f8 covers f1, the square the king crosses.
    let mut pos = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let mv = pos.parse_move("e1g1").unwrap();
    assert!(!pos.make_move(mv));
    // Queenside is unaffected by f-file pressure.
    let mv = pos.parse_move("e1c1").unwrap();
    assert!(pos.make_move(mv));
}

#[test]
fn test_queenside_knight_square_must_be_empty() {
    // B1 occupied: long castling is illegal even though c1/d1 are clear
    // and nothing attacks the king's path.
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    let mv = pos.parse_move("e1c1").unwrap();
    assert!(!pos.make_move(mv));
}

#[test]
fn test_null_move_round_trip() {
    let mut pos = Position::from_fen(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    )
    .unwrap();
    let before = snapshot(&pos);
    let side = pos.side_to_move();

    pos.make_null_move();
    assert_eq!(pos.enpassant_square(), None);
    assert_ne!(pos.side_to_move(), side);
    assert_ne!(pos.position_key(), before.1);
    // Pawn key and material are untouched by a null move.
    assert_eq!(pos.pawns_key(), before.2);
    assert_eq!(pos.material, before.3);

    pos.undo_null_move();
    assert_eq!(snapshot(&pos), before);
    assert_eq!(pos.side_to_move(), side);
}

#[test]
fn test_material_tracks_recompute_through_special_moves() {
    let mut pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let mut list = MoveList::new();
    pos.generate_moves(&mut list);
    for i in 0..list.len() {
        let mv = list.get(i);
        if pos.make_move(mv) {
            assert_eq!(
                pos.material,
                pos.compute_material(),
                "material drifted after {mv}"
            );
            pos.undo_move();
        }
    }
    assert_eq!(pos.material, pos.compute_material());
}

#[test]
fn test_deep_sequence_restores_exactly() {
    let mut pos = Position::new();
    let before = snapshot(&pos);
    let moves = ["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6"];
    for uci in moves {
        let mv = find_move(&pos, uci);
        assert!(pos.make_move(mv));
    }
    for _ in 0..moves.len() {
        pos.undo_move();
    }
    assert_eq!(snapshot(&pos), before);
}
