//! UCI command parsing.

use crate::board::Position;

/// A parsed UCI command. Commands are case-sensitive; anything else comes
/// back as `Unknown` and is ignored by the loop.
#[derive(Debug, Clone)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    SetOption(Vec<String>),
    Position(Vec<String>),
    Go(Vec<String>),
    Stop,
    Quit,
    Unknown(String),
}

#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = parts.first()?;

    let owned = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();

    let command = match *first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "setoption" => UciCommand::SetOption(owned()),
        "position" => UciCommand::Position(owned()),
        "go" => UciCommand::Go(owned()),
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        other => UciCommand::Unknown(other.to_string()),
    };
    Some(command)
}

/// Search-relevant parameters of a `go` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    pub wtime: Option<i64>,
    pub btime: Option<i64>,
    pub movestogo: Option<i64>,
    pub depth: Option<i32>,
    pub movetime: Option<i64>,
    pub infinite: bool,
}

#[must_use]
pub fn parse_go_params(parts: &[String]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 1;
    while i < parts.len() {
        let consumed = match parts[i].as_str() {
            "wtime" => {
                params.wtime = parts.get(i + 1).and_then(|v| v.parse().ok());
                2
            }
            "btime" => {
                params.btime = parts.get(i + 1).and_then(|v| v.parse().ok());
                2
            }
            "movestogo" => {
                params.movestogo = parts.get(i + 1).and_then(|v| v.parse().ok());
                2
            }
            "depth" => {
                params.depth = parts.get(i + 1).and_then(|v| v.parse().ok());
                2
            }
            "movetime" => {
                params.movetime = parts.get(i + 1).and_then(|v| v.parse().ok());
                2
            }
            "infinite" => {
                params.infinite = true;
                1
            }
            _ => 1,
        };
        i += consumed;
    }
    params
}

/// Apply a `position` command: load startpos or a FEN, then play out the
/// listed moves. A move that fails to parse or is rejected by `make_move`
/// stops consumption of the rest of the list; errors are not reported.
pub fn apply_position_command(pos: &mut Position, parts: &[String]) {
    let mut i = 1;

    match parts.get(i).map(String::as_str) {
        Some("startpos") => {
            *pos = Position::new();
            i += 1;
        }
        Some("fen") => {
            i += 1;
            let mut fen_fields = Vec::new();
            while i < parts.len() && parts[i] != "moves" {
                fen_fields.push(parts[i].as_str());
                i += 1;
            }
            match Position::from_fen(&fen_fields.join(" ")) {
                Ok(parsed) => *pos = parsed,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    log::warn!("rejected FEN in position command: {_e}");
                    return;
                }
            }
        }
        _ => return,
    }

    if parts.get(i).map(String::as_str) == Some("moves") {
        i += 1;
        while i < parts.len() {
            let Ok(mv) = pos.parse_move(&parts[i]) else {
                break;
            };
            if !pos.make_move(mv) {
                break;
            }
            i += 1;
        }
    }
}
