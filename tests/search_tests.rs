//! Search behavior through the public API.

use castellan::board::{MoveList, Position};
use castellan::search::{
    find_best_move, mate_distance, SearchLimits, SearchTables, MATE_SCORE, MAX_DEPTH,
};

fn search_to_depth(fen: &str, depth: i32) -> (Option<String>, i32) {
    let mut pos = Position::from_fen(fen).unwrap();
    let mut tables = SearchTables::new(16);
    let limits = SearchLimits::depth(depth);
    let mut last_score = 0;
    let best = find_best_move(&mut pos, &mut tables, &limits, |iteration| {
        last_score = iteration.score;
    });
    (best.map(|m| m.to_string()), last_score)
}

#[test]
fn test_finds_mate_in_one() {
    let (best, score) = search_to_depth("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", 3);
    assert_eq!(best.as_deref(), Some("a1a8"));
    assert!(
        score >= MATE_SCORE - MAX_DEPTH,
        "expected a mate score, got {score}"
    );
    assert_eq!(mate_distance(score), Some(1));
}

#[test]
fn test_finds_mate_in_one_as_black() {
    // Mirror of the white back-rank mate; scores are from the mover's
    // point of view, so black's mate is positive too.
    let (best, score) = search_to_depth("r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1", 3);
    assert_eq!(best.as_deref(), Some("a8a1"));
    assert_eq!(mate_distance(score), Some(1));
}

#[test]
fn test_takes_a_hanging_queen() {
    // Black's queen stands en prise to the c3 knight.
    let (best, score) = search_to_depth(
        "rnb1kbnr/ppp1pppp/8/3q4/8/2N5/PPPP1PPP/R1BQKBNR w KQkq - 0 3",
        4,
    );
    assert_eq!(best.as_deref(), Some("c3d5"));
    assert!(score > 500, "winning a queen should score big, got {score}");
}

#[test]
fn test_drawn_material_scores_zero() {
    // KN v K cannot be won; the search should report a dead draw.
    let (best, score) = search_to_depth("4k3/8/8/8/8/8/8/2N1K3 w - - 0 1", 4);
    assert!(best.is_some());
    assert_eq!(score, 0);
}

#[test]
fn test_stalemate_position_has_no_moves() {
    // Classic stalemate: black to move, not in check, no legal moves.
    let mut pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(castellan::search::legal_move_count(&mut pos), 0);
    assert!(!pos.in_check());
}

#[test]
fn test_search_respects_stop_flag() {
    let mut pos = Position::new();
    let mut tables = SearchTables::new(16);
    let limits = SearchLimits::depth(MAX_DEPTH);
    limits.stop.stop();
    let best = find_best_move(&mut pos, &mut tables, &limits, |_| {});
    // Stopped before the first iteration could complete.
    assert!(best.is_none());
}

#[test]
fn test_iterations_report_increasing_depth() {
    let mut pos = Position::new();
    let mut tables = SearchTables::new(16);
    let limits = SearchLimits::depth(5);
    let mut depths = Vec::new();
    find_best_move(&mut pos, &mut tables, &limits, |iteration| {
        depths.push(iteration.depth);
        assert!(!iteration.pv.is_empty());
        assert!(iteration.nodes > 0);
    });
    assert_eq!(depths, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_best_move_is_legal() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];
    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut tables = SearchTables::new(16);
        let limits = SearchLimits::depth(4);
        let best = find_best_move(&mut pos, &mut tables, &limits, |_| {})
            .unwrap_or_else(|| panic!("no move found for {fen}"));

        let mut list = MoveList::new();
        pos.generate_moves(&mut list);
        let generated = list.iter().any(|m| *m == best);
        assert!(generated, "search returned ungenerated move {best} for {fen}");
        assert!(pos.make_move(best), "search returned illegal move {best} for {fen}");
    }
}

#[test]
fn test_repetition_is_avoided_when_winning() {
    // With a queen against a bare king the engine must make progress, not
    // shuffle: after any search the chosen move keeps a mate score or at
    // least a large advantage.
    let (best, score) = search_to_depth("4k3/8/8/8/8/8/4Q3/4K3 w - - 0 1", 5);
    assert!(best.is_some());
    assert!(score > 500, "score {score} too low with queen up");
}
