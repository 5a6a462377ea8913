//! sn-core: Santorini rules, board and cell representation, action space,
//! legal-move generation, transitions, and terminal scoring.
//!
//! The engine is a deterministic, perfect-information, zero-sum two-player
//! state machine with value semantics: states are owned, `clone` is a full
//! independent copy, and every operation is constant-bounded with no I/O.

pub mod action;
pub mod cell;
pub mod engine;
pub mod game;
pub mod legal;
pub mod state;

pub use action::{
    action_to_index, action_to_string, index_to_action, placement_index, string_to_action, Action,
    ActionParseError, A, DIRECTIONS, DIRECTION_SYMBOLS, NUM_PLACEMENT_ACTIONS, NUM_PLAY_ACTIONS,
};
pub use cell::{Cell, DOME_HEIGHT, NUM_FLOORS};
pub use engine::apply_action;
pub use game::{GameInfo, GAME_INFO, MAX_GAME_LENGTH, NUM_DISTINCT_ACTIONS};
pub use state::{GameState, NUM_CELLS, NUM_COLS, NUM_PLAYERS, NUM_ROWS, WORKERS_PER_PLAYER};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
