//! State transitions. This module is the single place that mutates
//! `GameState` via the rules.

use crate::action::{index_to_action, step, Action};
use crate::cell::NUM_FLOORS;
use crate::legal::refresh_legal_actions;
use crate::state::GameState;

/// Apply a legal action to the state: place workers or move-and-build, flip
/// the side to move, then recompute legal actions (which may resolve a
/// stalemate loss for the new mover).
///
/// The action must come from the current `legal_actions()`. Passing anything
/// else is a programmer error: debug builds assert, release behavior is
/// unspecified.
pub fn apply_action(state: &mut GameState, action_id: u16) {
    debug_assert!(
        state.legal_actions.contains(&action_id),
        "illegal action {} applied",
        action_id
    );

    match index_to_action(action_id) {
        Action::Place { first, second } => {
            let mover = state.player_to_move;
            state.board[first as usize].set_occupant(mover);
            state.board[second as usize].set_occupant(mover);
            // Pair order is canonical by construction: first < second.
            state.worker_positions[mover as usize] = [first, second];
            state.num_workers_placed += 2;
        }
        Action::Play { worker, move_dir, build_dir } => {
            let mover = state.player_to_move as usize;
            let from = state.worker_positions[mover][worker as usize];
            let Some(to) = step(from, move_dir) else {
                debug_assert!(false, "move direction leaves the board");
                return;
            };
            let Some(build) = step(to, build_dir) else {
                debug_assert!(false, "build direction leaves the board");
                return;
            };

            state.board[from as usize].clear_occupant();
            state.board[to as usize].set_occupant(mover as u8);
            state.board[build as usize].raise();

            state.worker_positions[mover][worker as usize] = to;
            let pair = &mut state.worker_positions[mover];
            if pair[0] > pair[1] {
                pair.swap(0, 1);
            }

            if state.board[to as usize].height() == NUM_FLOORS {
                state.winner = Some(mover as u8);
            }
        }
    }

    state.history.push(action_id);
    state.player_to_move = 1 - state.player_to_move;
    refresh_legal_actions(state);
}
