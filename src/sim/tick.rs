//! The per-frame tick driver
//!
//! One tick runs the whole simulation frame in fixed order: measure the
//! wall-clock delta, integrate traffic, stamp a newly armed step, advance
//! or commit the in-flight step, then test for collisions. The host calls
//! this once per display frame at whatever cadence it refreshes; delta time
//! is measured, never assumed.

use glam::Vec2;

use super::collision;
use super::movement::Direction;
use super::state::{GameEvent, GamePhase, GameState};
use super::traffic;

/// Vertical hop offset at `progress` in [0, 1]: zero at both ends of the
/// step, peaking at the midpoint.
#[inline]
pub fn hop_height(progress: f32, amplitude: f32) -> f32 {
    (progress * std::f32::consts::PI).sin() * amplitude
}

/// Advance the game by one frame at `timestamp_ms`.
///
/// The first tick after construction or reset measures a zero delta.
/// Returns the events this frame produced, in order.
pub fn tick(state: &mut GameState, timestamp_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let delta_ms = state
        .previous_timestamp
        .map_or(0.0, |previous| timestamp_ms - previous);
    state.previous_timestamp = Some(timestamp_ms);

    traffic::advance(&mut state.lanes, &state.config, delta_ms as f32);

    // A move accepted while idle starts animating on this tick
    if state.arm_step {
        state.step_start = Some(timestamp_ms);
        state.arm_step = false;
    }

    if let Some(start) = state.step_start {
        if let Some(&head) = state.moves.front() {
            advance_step(state, head, timestamp_ms, start, &mut events);
        } else {
            state.step_start = None;
        }
    }

    if state.phase == GamePhase::Playing {
        let lane = &state.lanes[state.player.lane];
        if collision::player_run_over(lane, state.player.pos.x, &state.config) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
            log::info!("run over at lane {}", state.player.lane);
        }
    }

    events
}

/// Interpolate the in-flight step and commit it once its duration elapses.
/// Chained moves re-arm immediately so there is no idle frame between
/// steps.
fn advance_step(
    state: &mut GameState,
    head: Direction,
    timestamp_ms: f64,
    start: f64,
    events: &mut Vec<GameEvent>,
) {
    let cfg = &state.config;
    let elapsed = timestamp_ms - start;
    let progress = (elapsed / cfg.step_duration_ms).min(1.0) as f32;
    let offset = progress * cfg.grid_cell;

    let base = state.player.ground_position(cfg);
    state.player.pos = match head {
        Direction::Forward => Vec2::new(base.x, base.y + offset),
        Direction::Backward => Vec2::new(base.x, base.y - offset),
        Direction::Left => Vec2::new(base.x - offset, base.y),
        Direction::Right => Vec2::new(base.x + offset, base.y),
    };
    state.player.hop = hop_height(progress, cfg.hop_amplitude);

    if elapsed > cfg.step_duration_ms {
        match head {
            Direction::Forward => {
                state.player.lane += 1;
                events.push(GameEvent::Stepped {
                    lane: state.player.lane,
                });
            }
            Direction::Backward => {
                state.player.lane -= 1;
                events.push(GameEvent::Stepped {
                    lane: state.player.lane,
                });
            }
            Direction::Left => state.player.column -= 1,
            Direction::Right => state.player.column += 1,
        }
        state.moves.pop_front();

        if state.moves.is_empty() {
            state.step_start = None;
            state.player.pos = state.player.ground_position(&state.config);
            state.player.hop = 0.0;
        } else {
            state.step_start = Some(timestamp_ms);
        }
    }
}
