//! Legal-move generation.
//!
//! Placement phase: every placement pair whose two cells are empty. Play
//! phase: for each of the mover's workers, every king-step move that stays
//! on the board, lands on an unoccupied non-dome cell, and climbs at most
//! one floor, combined with every king-step build from the destination that
//! stays on the board and targets a non-dome cell that is unoccupied or is
//! the cell the worker just vacated.
//!
//! If generation produces nothing while the outcome is still open, the side
//! to move has lost: the stalemate rule resolves here, at recompute time,
//! not inside the transition itself.

use crate::action::{action_to_index, step, Action, PLACEMENT_PAIRS};
use crate::cell::NUM_FLOORS;
use crate::state::{GameState, NUM_PLAYERS, WORKERS_PER_PLAYER};

/// Recompute the cached legal-action list for the side to move, applying
/// the stalemate rule. Runs after every transition and at state creation.
///
/// Bounded work: at most 300 pair scans in the placement phase and
/// 2 workers x 8 moves x 8 builds checks in the play phase. The only
/// allocation is growth of the reused result vector.
pub(crate) fn refresh_legal_actions(state: &mut GameState) {
    state.legal_actions.clear();
    if state.winner.is_some() {
        return;
    }

    if state.num_workers_placed < (NUM_PLAYERS * WORKERS_PER_PLAYER) as u8 {
        for (idx, &(first, second)) in PLACEMENT_PAIRS.iter().enumerate() {
            if !state.board[first as usize].is_occupied()
                && !state.board[second as usize].is_occupied()
            {
                state.legal_actions.push(idx as u16);
            }
        }
    } else {
        let mover = state.player_to_move as usize;
        let positions = state.worker_positions[mover];
        // A worker on floor 3 means the game already ended last turn.
        debug_assert!(
            positions
                .iter()
                .all(|&p| state.board[p as usize].height() < NUM_FLOORS),
            "worker on the top floor in a non-terminal state"
        );
        for (worker, &from) in positions.iter().enumerate() {
            let from_height = state.board[from as usize].height();
            for move_dir in 0..8u8 {
                let Some(to) = step(from, move_dir) else {
                    continue;
                };
                let to_cell = state.board[to as usize];
                if to_cell.is_occupied() || to_cell.height() > from_height + 1 {
                    continue;
                }
                for build_dir in 0..8u8 {
                    let Some(build) = step(to, build_dir) else {
                        continue;
                    };
                    let build_cell = state.board[build as usize];
                    if build_cell.is_dome() {
                        continue;
                    }
                    // The mover still stands on `from` here; building onto it
                    // is the one occupied target that is allowed.
                    if build_cell.is_occupied() && build != from {
                        continue;
                    }
                    state.legal_actions.push(action_to_index(Action::Play {
                        worker: worker as u8,
                        move_dir,
                        build_dir,
                    }));
                }
            }
        }
    }

    if state.legal_actions.is_empty() {
        state.winner = Some(1 - state.player_to_move);
    }
}
