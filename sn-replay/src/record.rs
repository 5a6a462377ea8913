//! Versioned game-record schema and replay verification.

use serde::{Deserialize, Serialize};
use sn_core::{action_to_string, apply_action, string_to_action, ActionParseError, GameState};
use thiserror::Error;

/// Increment whenever the record layout changes.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// One finished game: the action text forms in play order plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecordV1 {
    pub schema_version: u32,
    pub actions: Vec<String>,
    pub winner: u8,
    pub plies: u32,
}

impl GameRecordV1 {
    /// Snapshot a finished game. Returns `None` while the game is running.
    pub fn from_state(state: &GameState) -> Option<GameRecordV1> {
        let winner = state.winner()?;
        Some(GameRecordV1 {
            schema_version: RECORD_SCHEMA_VERSION,
            actions: state.history().iter().map(|&a| action_to_string(a)).collect(),
            winner,
            plies: state.history().len() as u32,
        })
    }
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("unsupported record schema {0}")]
    Schema(u32),
    #[error("ply {ply}: {source}")]
    Parse {
        ply: usize,
        #[source]
        source: ActionParseError,
    },
    #[error("ply {ply}: action {action:?} is not legal in the reconstructed position")]
    IllegalAction { ply: usize, action: String },
    #[error("record ends in a non-terminal position")]
    NotTerminal,
    #[error("record declares winner {recorded}, replay produced {replayed}")]
    WinnerMismatch { recorded: u8, replayed: u8 },
}

/// Re-simulate a record through the rules engine, checking every action for
/// legality and the declared winner against the replayed outcome. Returns
/// the reconstructed terminal state.
pub fn replay(record: &GameRecordV1) -> Result<GameState, ReplayError> {
    if record.schema_version != RECORD_SCHEMA_VERSION {
        return Err(ReplayError::Schema(record.schema_version));
    }
    let mut state = GameState::new();
    for (ply, text) in record.actions.iter().enumerate() {
        let id = string_to_action(text).map_err(|source| ReplayError::Parse { ply, source })?;
        if !state.legal_actions().contains(&id) {
            return Err(ReplayError::IllegalAction {
                ply,
                action: text.clone(),
            });
        }
        apply_action(&mut state, id);
    }
    match state.winner() {
        None => Err(ReplayError::NotTerminal),
        Some(w) if w != record.winner => Err(ReplayError::WinnerMismatch {
            recorded: record.winner,
            replayed: w,
        }),
        Some(_) => Ok(state),
    }
}
