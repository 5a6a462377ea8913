//! Observation encoding for schema v1.

use crate::schema::OBSERVATION_LEN;
use sn_core::cell::DOME_HEIGHT;
use sn_core::{GameState, NUM_CELLS};

const HEIGHT_CHANNELS: usize = 4;
const MOVER_CHANNEL: usize = HEIGHT_CHANNELS;

/// Encode a state into a freshly zeroed tensor.
pub fn encode_observation(state: &GameState) -> [f32; OBSERVATION_LEN] {
    let mut out = [0.0f32; OBSERVATION_LEN];
    encode_observation_into(state, &mut out);
    out
}

/// Encode a state into a caller-provided buffer of exactly
/// [`OBSERVATION_LEN`] floats. The buffer is fully overwritten.
pub fn encode_observation_into(state: &GameState, out: &mut [f32]) {
    debug_assert_eq!(out.len(), OBSERVATION_LEN, "observation buffer size");
    out.fill(0.0);

    let mover = state.player_to_move();
    for idx in 0..NUM_CELLS {
        let cell = state.cell(idx);
        let h = cell.height();
        if h < DOME_HEIGHT {
            out[h as usize * NUM_CELLS + idx] = 1.0;
        }
        if let Some(player) = cell.occupant() {
            let channel = if player == mover {
                MOVER_CHANNEL
            } else {
                MOVER_CHANNEL + 1
            };
            out[channel * NUM_CELLS + idx] = f32::from(h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OBSERVATION_SHAPE;
    use sn_core::state::cell_index;
    use sn_core::GameState;

    fn at(out: &[f32], channel: usize, row: u8, col: u8) -> f32 {
        out[channel * NUM_CELLS + cell_index(row, col) as usize]
    }

    #[test]
    fn initial_state_is_all_ground() {
        let s = GameState::new();
        let out = encode_observation(&s);
        assert_eq!(out.len(), OBSERVATION_SHAPE.iter().product::<usize>());
        for idx in 0..NUM_CELLS {
            assert_eq!(out[idx], 1.0, "channel 0 marks ground-level cells");
        }
        for v in &out[NUM_CELLS..] {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn heights_and_workers_land_in_the_right_channels() {
        // Player 1 to move: their workers go to the mover channel.
        let mut heights = [0u8; sn_core::NUM_CELLS];
        heights[cell_index(2, 2) as usize] = 2; // player 0 worker stands here
        heights[cell_index(0, 1) as usize] = 3;
        heights[cell_index(4, 4) as usize] = 4; // dome
        let s = GameState::from_position(heights, [[12, 20], [0, 4]], 1);

        let out = encode_observation(&s);

        assert_eq!(at(&out, 2, 2, 2), 1.0);
        assert_eq!(at(&out, 0, 2, 2), 0.0);
        assert_eq!(at(&out, 3, 0, 1), 1.0);

        // domed cell: no height channel set at all
        for channel in 0..4 {
            assert_eq!(at(&out, channel, 4, 4), 0.0);
        }

        // mover = player 1, workers on cells 0 and 4 at ground level
        assert_eq!(at(&out, 4, 0, 0), 0.0);
        assert_eq!(at(&out, 5, 2, 2), 2.0);

        // opponent worker on a flat cell encodes 0.0 in channel 5 as well
        assert_eq!(at(&out, 5, 4, 0), 0.0);
    }

    #[test]
    fn exactly_one_height_mark_per_undomed_cell() {
        let mut heights = [0u8; sn_core::NUM_CELLS];
        for (i, h) in heights.iter_mut().enumerate() {
            *h = (i % 5) as u8; // heights 0..=4 across the board
        }
        heights[0] = 0;
        heights[4] = 0;
        heights[20] = 0;
        heights[24] = 0;
        let s = GameState::from_position(heights, [[0, 4], [20, 24]], 0);

        let out = encode_observation(&s);
        for idx in 0..NUM_CELLS {
            let marks = (0..4).filter(|&c| out[c * NUM_CELLS + idx] == 1.0).count();
            if s.cell(idx).height() < 4 {
                assert_eq!(marks, 1, "cell {}", idx);
            } else {
                assert_eq!(marks, 0, "domed cell {}", idx);
            }
        }
    }

    #[test]
    fn occupancy_channels_are_exclusive_and_match_the_board() {
        let mut heights = [0u8; sn_core::NUM_CELLS];
        heights[6] = 1;
        heights[18] = 2;
        let s = GameState::from_position(heights, [[6, 8], [16, 18]], 0);
        let out = encode_observation(&s);

        for idx in 0..NUM_CELLS {
            let mine = out[4 * NUM_CELLS + idx];
            let theirs = out[5 * NUM_CELLS + idx];
            match s.cell(idx).occupant() {
                None => {
                    assert_eq!(mine, 0.0);
                    assert_eq!(theirs, 0.0);
                }
                Some(p) => {
                    let expected = f32::from(s.cell(idx).height());
                    if p == s.player_to_move() {
                        assert_eq!(mine, expected);
                        assert_eq!(theirs, 0.0);
                    } else {
                        assert_eq!(theirs, expected);
                        assert_eq!(mine, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn encoding_is_invariant_under_color_swap() {
        let mut heights = [0u8; sn_core::NUM_CELLS];
        heights[7] = 1;
        heights[13] = 2;
        heights[21] = 4;
        let s = GameState::from_position(heights, [[7, 11], [13, 23]], 0);

        assert_eq!(encode_observation(&s), encode_observation(&s.swap_players()));
    }

    #[test]
    #[should_panic]
    fn wrong_buffer_size_panics_in_debug() {
        let s = GameState::new();
        let mut out = vec![0.0f32; OBSERVATION_LEN - 1];
        encode_observation_into(&s, &mut out);
    }
}
