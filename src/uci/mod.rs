//! The UCI protocol loop.
//!
//! Searches run on a worker thread so `stop` can be answered while one is
//! in flight; the engine state is behind a mutex and any command that
//! touches it first joins the worker, mirroring a GUI's expectations.

pub mod command;
pub mod options;
pub mod report;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use parking_lot::Mutex;

use crate::board::{Color, Position};
use crate::search::{find_best_move, SearchLimits, SearchTables};
use crate::sync::StopFlag;
use crate::time::{time_to_search, TimeOptions};
use crate::tt::{TranspositionTable, DEFAULT_HASH_SIZE_MB};

use self::command::{
    apply_position_command, parse_go_params, parse_uci_command, GoParams, UciCommand,
};
use self::options::{UciOptionAction, UciOptions};

/// The position and the search tables, shared between the command loop and
/// the search worker.
pub struct Engine {
    pub pos: Position,
    pub tables: SearchTables,
}

impl Engine {
    #[must_use]
    pub fn new(hash_mb: usize) -> Self {
        Engine {
            pos: Position::new(),
            tables: SearchTables::new(hash_mb),
        }
    }
}

/// Search limits for a `go` command, per the engine's time management.
fn build_limits(pos: &Position, params: GoParams, stop: StopFlag) -> SearchLimits {
    let mut time_options = TimeOptions::default();
    let mut depth = 0;

    match pos.side_to_move() {
        Color::White => {
            if let Some(wtime) = params.wtime {
                time_options.time_left = wtime;
            }
        }
        Color::Black => {
            if let Some(btime) = params.btime {
                time_options.time_left = btime;
            }
        }
    }
    if let Some(movestogo) = params.movestogo {
        time_options.moves_to_go = movestogo;
    }
    if let Some(d) = params.depth {
        depth = d;
        time_options.infinite = true;
    }
    if params.movetime.is_some() {
        time_options.infinite = true;
    }
    if params.infinite {
        time_options.infinite = true;
    }

    let budget = params
        .movetime
        .filter(|&ms| ms > 0)
        .unwrap_or_else(|| time_to_search(time_options, pos.history_ply()));

    SearchLimits {
        depth,
        time_to_search_ms: budget,
        start_time: Instant::now(),
        stop,
    }
}

fn join_worker(worker: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = worker.take() {
        let _ = handle.join();
    }
}

/// Run the UCI loop until `quit` or end of input.
pub fn run() {
    crate::init();

    let engine = Arc::new(Mutex::new(Engine::new(DEFAULT_HASH_SIZE_MB)));
    let stop = StopFlag::new();
    let mut uci_options = UciOptions::new();
    let mut worker: Option<JoinHandle<()>> = None;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => uci_options.print(),
            UciCommand::IsReady => {
                join_worker(&mut worker);
                report::print_ready();
            }
            UciCommand::UciNewGame => {}
            UciCommand::SetOption(parts) => {
                join_worker(&mut worker);
                if let Some(UciOptionAction::ReinitHash(mb)) =
                    uci_options.apply_setoption(&parts)
                {
                    engine.lock().tables.tt = TranspositionTable::new(mb);
                }
            }
            UciCommand::Position(parts) => {
                join_worker(&mut worker);
                apply_position_command(&mut engine.lock().pos, &parts);
            }
            UciCommand::Go(parts) => {
                join_worker(&mut worker);
                stop.reset();
                let params = parse_go_params(&parts);
                let limits = build_limits(&engine.lock().pos, params, stop.clone());
                let engine = Arc::clone(&engine);
                worker = Some(std::thread::spawn(move || {
                    let mut guard = engine.lock();
                    let Engine { pos, tables } = &mut *guard;
                    let best = find_best_move(pos, tables, &limits, report::print_iteration);
                    report::print_bestmove(best);
                    let _ = io::stdout().flush();
                }));
            }
            UciCommand::Stop => {
                stop.stop();
                join_worker(&mut worker);
            }
            UciCommand::Quit => {
                stop.stop();
                join_worker(&mut worker);
                break;
            }
            UciCommand::Unknown(_) => {}
        }

        let _ = io::stdout().flush();
    }
}
