//! Action space definition, index mapping, and text forms.
//!
//! Action space size: A = 428
//! - idx 0..=299   : Place(pair), an unordered pair of distinct cells in
//!   lexicographic pair order, on which the mover puts both workers
//! - idx 300..=427 : Play = 300 + worker*64 + move_dir*8 + build_dir
//!
//! Text forms: `P<r1><c1><r2><c2>` for placements and `<w>M<m>B<b>` for
//! plays, where `<m>`/`<b>` come from the numpad direction alphabet.

use crate::state::{cell_index, coord, in_bounds, NUM_CELLS};
use thiserror::Error;

/// Unordered pairs of distinct cells: 25*24/2.
pub const NUM_PLACEMENT_ACTIONS: usize = NUM_CELLS * (NUM_CELLS - 1) / 2;

/// Worker choice times 8 move directions times 8 build directions.
pub const NUM_PLAY_ACTIONS: usize = 2 * 8 * 8;

/// Total action space size.
pub const A: usize = NUM_PLACEMENT_ACTIONS + NUM_PLAY_ACTIONS;

/// The 8 king-move offsets `(dr, dc)`, row-major. The order is fixed:
/// directions `d` and `7 - d` are exact opposites, which tests assert.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Numpad-style symbol per direction id, used by the action text form.
pub const DIRECTION_SYMBOLS: [u8; 8] = *b"78946123";

/// Inverse of the placement-pair index formula, precomputed.
pub static PLACEMENT_PAIRS: [(u8, u8); NUM_PLACEMENT_ACTIONS] = generate_placement_pairs();

const fn generate_placement_pairs() -> [(u8, u8); NUM_PLACEMENT_ACTIONS] {
    let mut table = [(0u8, 0u8); NUM_PLACEMENT_ACTIONS];
    let mut idx = 0;
    let mut i = 0;
    while i < NUM_CELLS {
        let mut j = i + 1;
        while j < NUM_CELLS {
            table[idx] = (i as u8, j as u8);
            idx += 1;
            j += 1;
        }
        i += 1;
    }
    table
}

/// Decoded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place both of the mover's workers on two distinct empty cells.
    Place { first: u8, second: u8 },
    /// Move worker `worker` one king step along `move_dir`, then build one
    /// king step from the destination along `build_dir`.
    Play { worker: u8, move_dir: u8, build_dir: u8 },
}

/// Index of the placement pair `(first, second)` with `first < second`.
///
/// A pair that is out of range or not in ascending order is a programmer
/// error: debug builds assert, release behavior is unspecified.
pub fn placement_index(first: u8, second: u8) -> u16 {
    debug_assert!(
        first < second && (second as usize) < NUM_CELLS,
        "invalid placement pair ({}, {})",
        first,
        second
    );
    // Pairs starting below row i: sum of (N-1-k) for k < i, written in a
    // form that cannot underflow at i = 0.
    let i = first as usize;
    let j = second as usize;
    (i * (2 * NUM_CELLS - i - 1) / 2 + (j - i - 1)) as u16
}

/// Convert an `Action` to its index in the fixed action space.
///
/// Out-of-range fields are a programmer error, caught by debug assertions.
pub fn action_to_index(action: Action) -> u16 {
    match action {
        Action::Place { first, second } => placement_index(first, second),
        Action::Play { worker, move_dir, build_dir } => {
            debug_assert!(worker < 2, "worker out of range: {}", worker);
            debug_assert!(move_dir < 8, "move direction out of range: {}", move_dir);
            debug_assert!(build_dir < 8, "build direction out of range: {}", build_dir);
            NUM_PLACEMENT_ACTIONS as u16 + worker as u16 * 64 + move_dir as u16 * 8 + build_dir as u16
        }
    }
}

/// Convert an index in `0..A` to an `Action`.
///
/// An index outside `0..A` is a programmer error: debug builds assert,
/// release behavior is unspecified.
pub fn index_to_action(idx: u16) -> Action {
    debug_assert!((idx as usize) < A, "action index out of range: {}", idx);
    if (idx as usize) < NUM_PLACEMENT_ACTIONS {
        let (first, second) = PLACEMENT_PAIRS[idx as usize];
        Action::Place { first, second }
    } else {
        let rest = idx as usize - NUM_PLACEMENT_ACTIONS;
        Action::Play {
            worker: (rest / 64) as u8,
            move_dir: ((rest % 64) / 8) as u8,
            build_dir: (rest % 8) as u8,
        }
    }
}

/// Apply direction `dir` to `cell`, or `None` if the step leaves the board.
#[inline]
pub fn step(cell: u8, dir: u8) -> Option<u8> {
    let (dr, dc) = DIRECTIONS[dir as usize];
    let (r, c) = coord(cell);
    let (r, c) = (r + dr, c + dc);
    if in_bounds(r, c) {
        Some(cell_index(r as u8, c as u8))
    } else {
        None
    }
}

/// Render an action index in the canonical text form. The index must be in
/// `0..A`; out-of-range ids are debug-asserted in [`index_to_action`].
pub fn action_to_string(idx: u16) -> String {
    match index_to_action(idx) {
        Action::Place { first, second } => {
            let (r1, c1) = coord(first);
            let (r2, c2) = coord(second);
            format!("P{}{}{}{}", r1, c1, r2, c2)
        }
        Action::Play { worker, move_dir, build_dir } => {
            format!(
                "{}M{}B{}",
                worker,
                DIRECTION_SYMBOLS[move_dir as usize] as char,
                DIRECTION_SYMBOLS[build_dir as usize] as char
            )
        }
    }
}

/// Recoverable failures of [`string_to_action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("malformed action string: {0:?}")]
    Malformed(String),
    #[error("coordinate digit out of range: {0:?}")]
    BadCoordinate(char),
    #[error("unknown direction symbol: {0:?}")]
    BadDirection(char),
    #[error("worker id must be 0 or 1, got {0:?}")]
    BadWorker(char),
    #[error("placement cells must be distinct and in ascending cell order")]
    PlacementOrder,
}

fn parse_coordinate(b: u8) -> Result<u8, ActionParseError> {
    if b.is_ascii_digit() && b < b'5' {
        Ok(b - b'0')
    } else {
        Err(ActionParseError::BadCoordinate(b as char))
    }
}

fn parse_direction(b: u8) -> Result<u8, ActionParseError> {
    DIRECTION_SYMBOLS
        .iter()
        .position(|&s| s == b)
        .map(|d| d as u8)
        .ok_or(ActionParseError::BadDirection(b as char))
}

/// Parse the canonical text form back into an action index.
pub fn string_to_action(s: &str) -> Result<u16, ActionParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 {
        return Err(ActionParseError::Malformed(s.to_string()));
    }
    if bytes[0] == b'P' {
        let r1 = parse_coordinate(bytes[1])?;
        let c1 = parse_coordinate(bytes[2])?;
        let r2 = parse_coordinate(bytes[3])?;
        let c2 = parse_coordinate(bytes[4])?;
        let first = cell_index(r1, c1);
        let second = cell_index(r2, c2);
        if first >= second {
            return Err(ActionParseError::PlacementOrder);
        }
        Ok(placement_index(first, second))
    } else if bytes[1] == b'M' && bytes[3] == b'B' {
        let worker = match bytes[0] {
            b'0' => 0,
            b'1' => 1,
            b => return Err(ActionParseError::BadWorker(b as char)),
        };
        let move_dir = parse_direction(bytes[2])?;
        let build_dir = parse_direction(bytes[4])?;
        Ok(action_to_index(Action::Play { worker, move_dir, build_dir }))
    } else {
        Err(ActionParseError::Malformed(s.to_string()))
    }
}
