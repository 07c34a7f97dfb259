//! Search output in UCI format.

use crate::board::Move;
use crate::search::{mate_distance, SearchIteration};

/// Per-iteration `info` record: score, depth, nodes, time, pv.
pub fn print_iteration(iteration: &SearchIteration) {
    let score = match mate_distance(iteration.score) {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {}", iteration.score),
    };
    let pv = iteration
        .pv
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "info score {} depth {} nodes {} time {} pv {}",
        score, iteration.depth, iteration.nodes, iteration.time_ms, pv
    );
}

pub fn print_ready() {
    println!("readyok");
}

pub fn print_bestmove(best_move: Option<Move>) {
    match best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }
}
