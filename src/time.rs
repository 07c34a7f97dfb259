//! Time management: budget allocation and timeout polling.

use std::time::Instant;

/// Budget used for `go infinite` and fixed-depth searches: one hour.
pub(crate) const MAX_TIME_TO_SEARCH_MS: i64 = 3_600_000;

/// Safety margin subtracted from the clock before declaring a timeout.
const TIMEOUT_MARGIN_MS: i64 = 100;

/// Time control inputs taken from the `go` command.
#[derive(Debug, Clone, Copy)]
pub struct TimeOptions {
    /// Remaining time on our clock in milliseconds.
    pub time_left: i64,
    /// Moves until the next time control; -1 means sudden death.
    pub moves_to_go: i64,
    pub infinite: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        TimeOptions {
            time_left: 0,
            moves_to_go: -1,
            infinite: false,
        }
    }
}

/// Milliseconds to spend on the next move.
#[must_use]
pub fn time_to_search(options: TimeOptions, moves_so_far: usize) -> i64 {
    if options.infinite {
        return MAX_TIME_TO_SEARCH_MS;
    }
    if options.moves_to_go == -1 {
        sudden_death_time(options.time_left, moves_so_far as i64)
    } else {
        regular_time(options.time_left, options.moves_to_go, moves_so_far as i64)
    }
}

/// Regular control: an even share of the remaining time, half again as
/// much while the game is young.
fn regular_time(time_left: i64, moves_to_go: i64, moves_so_far: i64) -> i64 {
    let share = time_left / moves_to_go.max(1);
    if moves_so_far < 40 {
        share * 3 / 2
    } else {
        share
    }
}

/// Sudden death: derive a horizon that starts at 40 moves and shrinks to
/// 15 as the game goes on, then budget as in a regular control.
fn sudden_death_time(time_left: i64, moves_so_far: i64) -> i64 {
    let moves_to_go = if moves_so_far <= 80 {
        (-5 * moves_so_far) / 16 + 40
    } else {
        15
    };
    regular_time(time_left, moves_to_go, moves_so_far)
}

/// Has the budget expired? A 100 ms margin is kept in hand so the engine
/// answers before its clock actually runs out.
#[must_use]
pub fn time_out(start_time: Instant, time_to_search_ms: i64) -> bool {
    let elapsed = start_time.elapsed().as_millis() as i64;
    elapsed - TIMEOUT_MARGIN_MS >= time_to_search_ms
}

/// Is there room for another deepening iteration? A new iteration tends to
/// cost as much as everything before it, so require half the budget free.
#[must_use]
pub fn time_for_next_iteration(start_time: Instant, time_to_search_ms: i64) -> bool {
    let elapsed = start_time.elapsed().as_millis() as i64;
    elapsed * 2 <= time_to_search_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_infinite_budget() {
        let options = TimeOptions {
            infinite: true,
            ..TimeOptions::default()
        };
        assert_eq!(time_to_search(options, 0), MAX_TIME_TO_SEARCH_MS);
    }

    #[test]
    fn test_regular_control_early_and_late() {
        let options = TimeOptions {
            time_left: 60_000,
            moves_to_go: 20,
            infinite: false,
        };
        // Opening: 1.5 x the even share.
        assert_eq!(time_to_search(options, 10), 4_500);
        // Later: the even share.
        assert_eq!(time_to_search(options, 50), 3_000);
    }

    #[test]
    fn test_sudden_death_horizon_shrinks() {
        let options = TimeOptions {
            time_left: 120_000,
            moves_to_go: -1,
            infinite: false,
        };
        // Move 0: horizon 40, opening factor 1.5.
        assert_eq!(time_to_search(options, 0), 4_500);
        // Move 48: horizon 40 - 15 = 25.
        assert_eq!(time_to_search(options, 48), 120_000 / 25);
        // Move 80: horizon bottoms out at 15.
        assert_eq!(time_to_search(options, 80), 120_000 / 15);
        // Past move 80 the horizon stays at 15.
        assert_eq!(time_to_search(options, 200), 120_000 / 15);
    }

    #[test]
    fn test_time_out_respects_margin() {
        let start = Instant::now();
        // A generous budget has not expired.
        assert!(!time_out(start, 10_000));
        // A budget below the safety margin expires immediately.
        let old_start = start - Duration::from_millis(250);
        assert!(time_out(old_start, 100));
    }

    #[test]
    fn test_next_iteration_gate() {
        let start = Instant::now();
        assert!(time_for_next_iteration(start, 1_000));
        let old_start = start - Duration::from_millis(800);
        assert!(!time_for_next_iteration(old_start, 1_000));
    }
}
