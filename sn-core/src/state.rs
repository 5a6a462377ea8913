//! Canonical game state: the 5x5 board, worker tracking, outcome, and the
//! cached legal-action list.

use std::fmt;

use crate::action::action_to_string;
use crate::cell::{Cell, NUM_FLOORS};
use crate::legal::refresh_legal_actions;

pub const NUM_PLAYERS: usize = 2;
pub const NUM_ROWS: usize = 5;
pub const NUM_COLS: usize = 5;
pub const NUM_CELLS: usize = NUM_ROWS * NUM_COLS;
pub const WORKERS_PER_PLAYER: usize = 2;

/// `(row, col)` of a cell index. Signed so callers can add direction offsets
/// before a bounds check.
#[inline]
pub fn coord(cell: u8) -> (i8, i8) {
    ((cell / NUM_COLS as u8) as i8, (cell % NUM_COLS as u8) as i8)
}

/// Cell index of `(row, col)`.
#[inline]
pub fn cell_index(row: u8, col: u8) -> u8 {
    debug_assert!((row as usize) < NUM_ROWS && (col as usize) < NUM_COLS);
    row * NUM_COLS as u8 + col
}

#[inline]
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..NUM_ROWS as i8).contains(&row) && (0..NUM_COLS as i8).contains(&col)
}

/// Full game state. Mutation happens only through [`crate::apply_action`];
/// everything else is read-only.
///
/// Worker pairs are stored canonically ordered (`positions[0] <= positions[1]`)
/// so that worker id 0 always names the lower-indexed cell. Two plays that
/// differ only in which of two interchangeable workers acts therefore share
/// one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: [Cell; NUM_CELLS],
    /// Per player; meaningful only once that player's workers are placed.
    pub(crate) worker_positions: [[u8; WORKERS_PER_PLAYER]; NUM_PLAYERS],
    pub(crate) num_workers_placed: u8,
    /// The side to move. Kept pointing at the loser once the game ends;
    /// external callers see the terminal sentinel via [`GameState::current_player`].
    pub(crate) player_to_move: u8,
    pub(crate) winner: Option<u8>,
    pub(crate) legal_actions: Vec<u16>,
    /// Applied action ids, in play order.
    pub(crate) history: Vec<u16>,
}

impl GameState {
    /// The initial state: empty board, no workers, player 0 to place.
    pub fn new() -> GameState {
        let mut state = GameState {
            board: [Cell::EMPTY; NUM_CELLS],
            worker_positions: [[0; WORKERS_PER_PLAYER]; NUM_PLAYERS],
            num_workers_placed: 0,
            player_to_move: 0,
            winner: None,
            legal_actions: Vec::new(),
            history: Vec::new(),
        };
        refresh_legal_actions(&mut state);
        state
    }

    /// Build an arbitrary play-phase position: all four workers down, given
    /// building heights, `to_move` next. Worker pairs are canonicalized and
    /// legal actions recomputed, so the position may resolve to an immediate
    /// stalemate loss for `to_move`.
    ///
    /// Heights must be in range and worker cells on the board, distinct, and
    /// below floor 3 (a worker on floor 3 means the game already ended);
    /// these are debug-asserted.
    pub fn from_position(
        heights: [u8; NUM_CELLS],
        workers: [[u8; WORKERS_PER_PLAYER]; NUM_PLAYERS],
        to_move: u8,
    ) -> GameState {
        debug_assert!(to_move < NUM_PLAYERS as u8);
        let mut board = [Cell::EMPTY; NUM_CELLS];
        for (cell, &h) in board.iter_mut().zip(heights.iter()) {
            cell.set_height(h);
        }
        let mut worker_positions = workers;
        for (player, pair) in worker_positions.iter_mut().enumerate() {
            pair.sort_unstable();
            for &pos in pair.iter() {
                debug_assert!((pos as usize) < NUM_CELLS);
                debug_assert!(board[pos as usize].height() < NUM_FLOORS);
                board[pos as usize].set_occupant(player as u8);
            }
        }
        let mut state = GameState {
            board,
            worker_positions,
            num_workers_placed: (NUM_PLAYERS * WORKERS_PER_PLAYER) as u8,
            player_to_move: to_move,
            winner: None,
            legal_actions: Vec::new(),
            history: Vec::new(),
        };
        refresh_legal_actions(&mut state);
        state
    }

    /// The player to move, or `None` once the game is over.
    #[inline]
    pub fn current_player(&self) -> Option<u8> {
        if self.is_terminal() {
            None
        } else {
            Some(self.player_to_move)
        }
    }

    /// The side whose turn it would be, ignoring the terminal sentinel.
    /// At a terminal state reached by stalemate this is the loser; after a
    /// climb win it is the winner's opponent. Returns and the observation
    /// perspective are defined relative to this field.
    #[inline]
    pub fn player_to_move(&self) -> u8 {
        self.player_to_move
    }

    /// The winner, if the game is over.
    #[inline]
    pub fn winner(&self) -> Option<u8> {
        self.winner
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Terminal returns per player: +1 / -1 on a win, `[0, 0]` while the
    /// game is still running.
    pub fn returns(&self) -> [f32; NUM_PLAYERS] {
        match self.winner {
            Some(w) => {
                let mut r = [0.0; NUM_PLAYERS];
                r[w as usize] = 1.0;
                r[1 - w as usize] = -1.0;
                r
            }
            None => [0.0; NUM_PLAYERS],
        }
    }

    /// Legal action ids for the side to move; empty exactly when terminal.
    /// Always sorted ascending and duplicate-free.
    #[inline]
    pub fn legal_actions(&self) -> &[u16] {
        &self.legal_actions
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        self.board[idx]
    }

    /// This player's worker cells, canonically ordered.
    #[inline]
    pub fn worker_positions(&self, player: u8) -> [u8; WORKERS_PER_PLAYER] {
        self.worker_positions[player as usize]
    }

    #[inline]
    pub fn num_workers_placed(&self) -> u8 {
        self.num_workers_placed
    }

    /// Applied action ids in play order.
    #[inline]
    pub fn history(&self) -> &[u16] {
        self.history.as_slice()
    }

    /// Canonical action-history string: the text form of every applied
    /// action, in play order. Perfect information, so both players see the
    /// same string.
    pub fn information_state_string(&self) -> String {
        let parts: Vec<String> = self.history.iter().map(|&a| action_to_string(a)).collect();
        parts.join(", ")
    }

    /// Human-readable board text, one character per cell, rows separated by
    /// newlines. Same as the `Display` rendering.
    pub fn observation_string(&self) -> String {
        self.to_string()
    }

    /// The same position with the players' colors exchanged: workers
    /// recolored, side to move flipped, winner mirrored. Action ids are
    /// color-agnostic, so the legal-action list and history carry over.
    pub fn swap_players(&self) -> GameState {
        let mut board = self.board;
        for cell in board.iter_mut() {
            if let Some(p) = cell.occupant() {
                cell.clear_occupant();
                cell.set_occupant(1 - p);
            }
        }
        GameState {
            board,
            worker_positions: [self.worker_positions[1], self.worker_positions[0]],
            num_workers_placed: self.num_workers_placed,
            player_to_move: 1 - self.player_to_move,
            winner: self.winner.map(|w| 1 - w),
            legal_actions: self.legal_actions.clone(),
            history: self.history.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..NUM_ROWS {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..NUM_COLS {
                write!(f, "{}", self.board[row * NUM_COLS + col].to_char())?;
            }
        }
        Ok(())
    }
}
