//! Observation schema v1.
//!
//! A dense `[CHANNELS, 5, 5]` tensor, channel-major then row-major, encoded
//! from the point of view of the side to move.
//!
//! ### Layout (v1)
//! - **channels 0..=3**: top-floor one-hot; channel `h` carries 1.0 where
//!   the cell's height is exactly `h`, for `h` in 0..=3. A domed cell
//!   (height 4) leaves all four channels zero, which identifies it uniquely.
//! - **channel 4**: the mover's workers, `float(height)` on each cell one
//!   of them stands on.
//! - **channel 5**: the opponent's workers, same value convention.
//!
//! Channels 4/5 are relative to the side to move, not to absolute player
//! ids, so the encoding is invariant under swapping player colors.

use sn_core::game::CELL_STATES;
use sn_core::{NUM_CELLS, NUM_COLS, NUM_ROWS};

/// Increment whenever the layout changes.
pub const FEATURE_SCHEMA_ID: u32 = 1;

/// Number of channels: 1 + walkable floors + players.
pub const CHANNELS: usize = CELL_STATES;

/// Tensor shape, channel-major.
pub const OBSERVATION_SHAPE: [usize; 3] = [CHANNELS, NUM_ROWS, NUM_COLS];

/// Flattened tensor length.
pub const OBSERVATION_LEN: usize = CHANNELS * NUM_CELLS;
