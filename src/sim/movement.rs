//! Directional commands and the move queue
//!
//! Commands are validated against the *projected* position — the player's
//! committed grid cell with every queued-but-uncommitted move folded in —
//! so rapid consecutive inputs queue correctly while a step is still
//! animating. Invalid commands are dropped silently; there is no error
//! path for normal play.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::world;

/// A single directional command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Fold the pending queue over the committed position to get where the
/// player will stand once every queued move lands.
///
/// Queued moves were each validated against the projection at submit time,
/// so the fold stays within the board and never drops below lane 0.
pub fn projected_position(state: &GameState) -> (usize, usize) {
    state.moves.iter().fold(
        (state.player.lane, state.player.column),
        |(lane, column), direction| match direction {
            Direction::Forward => (lane + 1, column),
            Direction::Backward => (lane - 1, column),
            Direction::Left => (lane, column - 1),
            Direction::Right => (lane, column + 1),
        },
    )
}

/// Submit a directional command.
///
/// Validates against the projected position: forward/backward are rejected
/// when the destination row is a forest with the projected column occupied,
/// left/right at the board edges or into an occupied cell of the projected
/// row, backward additionally at lane 0. Accepted forwards synchronously
/// extend the world so the destination lane always exists before the move
/// is queued. Rejected commands are ignored without side effects.
pub fn submit(state: &mut GameState, direction: Direction) {
    let (lane, column) = projected_position(state);

    match direction {
        Direction::Forward => {
            if state.lanes[lane + 1].blocks_column(column) {
                return;
            }
            arm_if_idle(state);
            world::extend(&mut state.lanes, &state.config, &mut state.rng);
        }
        Direction::Backward => {
            if lane == 0 {
                return;
            }
            if state.lanes[lane - 1].blocks_column(column) {
                return;
            }
            arm_if_idle(state);
        }
        Direction::Left => {
            if column == 0 {
                return;
            }
            if state.lanes[lane].blocks_column(column - 1) {
                return;
            }
            arm_if_idle(state);
        }
        Direction::Right => {
            if column == state.config.columns - 1 {
                return;
            }
            if state.lanes[lane].blocks_column(column + 1) {
                return;
            }
            arm_if_idle(state);
        }
    }

    state.moves.push_back(direction);
}

/// Mark the step animation to start on the next tick, unless a step is
/// already in flight (chained moves start back-to-back in the tick driver).
fn arm_if_idle(state: &mut GameState) {
    if state.step_start.is_none() {
        state.arm_step = true;
    }
}
