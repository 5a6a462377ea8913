//! Framework-facing game metadata: the numbers and facts a general
//! game-playing harness reads once at registration time.

use crate::action::A;
use crate::cell::NUM_FLOORS;
use crate::state::{NUM_CELLS, NUM_COLS, NUM_PLAYERS, NUM_ROWS, WORKERS_PER_PLAYER};

pub const NUM_DISTINCT_ACTIONS: usize = A;

pub const MIN_UTILITY: f32 = -1.0;
pub const MAX_UTILITY: f32 = 1.0;
pub const UTILITY_SUM: f32 = 0.0;

/// Distinct per-cell contents a dense observation distinguishes:
/// 1 + walkable floors + players.
pub const CELL_STATES: usize = 1 + NUM_FLOORS as usize + NUM_PLAYERS;

/// Observation tensor shape, channel-major.
pub const OBSERVATION_TENSOR_SHAPE: [usize; 3] = [CELL_STATES, NUM_ROWS, NUM_COLS];

/// Upper bound on plies: both placements plus one height increment per play
/// until every cell is domed.
pub const MAX_GAME_LENGTH: usize =
    NUM_PLAYERS * WORKERS_PER_PLAYER + NUM_CELLS * (NUM_FLOORS as usize + 1);

/// Static facts about the game, for harness registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub short_name: &'static str,
    pub long_name: &'static str,
    /// Players move one at a time.
    pub sequential: bool,
    /// No chance events.
    pub deterministic: bool,
    pub perfect_information: bool,
    pub zero_sum: bool,
    /// Rewards only at terminal states.
    pub terminal_rewards: bool,
    pub num_players: usize,
}

pub const GAME_INFO: GameInfo = GameInfo {
    short_name: "santorini",
    long_name: "Santorini",
    sequential: true,
    deterministic: true,
    perfect_information: true,
    zero_sum: true,
    terminal_rewards: true,
    num_players: NUM_PLAYERS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_numbers() {
        assert_eq!(NUM_DISTINCT_ACTIONS, 428);
        assert_eq!(CELL_STATES, 6);
        assert_eq!(OBSERVATION_TENSOR_SHAPE, [6, 5, 5]);
        assert_eq!(MAX_GAME_LENGTH, 104);
        assert_eq!(MIN_UTILITY, -1.0);
        assert_eq!(MAX_UTILITY, 1.0);
        assert_eq!(UTILITY_SUM, 0.0);
        assert_eq!(GAME_INFO.num_players, 2);
    }

    #[test]
    fn registration_facts() {
        assert_eq!(GAME_INFO.short_name, "santorini");
        assert!(GAME_INFO.sequential);
        assert!(GAME_INFO.deterministic);
        assert!(GAME_INFO.perfect_information);
        assert!(GAME_INFO.zero_sum);
        assert!(GAME_INFO.terminal_rewards);
    }
}
