//! Collision detection between the player and road traffic
//!
//! Everything reduces to 1-D interval overlap on the traffic axis: the
//! player's bounding interval from its animated center and fixed width
//! against each vehicle's interval from its center and class length.
//! Overlap is strict on both bounds, so intervals that merely touch do not
//! count as a hit.

use super::lane::{Lane, LaneKind};
use crate::config::Config;

/// Open-interval overlap test: `(min_a, max_a)` against `(min_b, max_b)`.
/// Touching edges (equal bounds) are not an overlap.
#[inline]
pub fn intervals_overlap(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> bool {
    max_a > min_b && min_a < max_b
}

/// Whether a vehicle centered at `vehicle_x` hits the player centered at
/// `player_x`, given both bounding lengths.
#[inline]
pub fn vehicle_hits_player(
    player_x: f32,
    player_width: f32,
    vehicle_x: f32,
    vehicle_length: f32,
) -> bool {
    intervals_overlap(
        player_x - player_width / 2.0,
        player_x + player_width / 2.0,
        vehicle_x - vehicle_length / 2.0,
        vehicle_x + vehicle_length / 2.0,
    )
}

/// Test the player's animated x against every vehicle in `lane`.
/// Non-road lanes can never collide.
pub fn player_run_over(lane: &Lane, player_x: f32, cfg: &Config) -> bool {
    let LaneKind::Road {
        class, vehicles, ..
    } = &lane.kind
    else {
        return false;
    };
    let length = class.length(cfg);
    vehicles
        .iter()
        .any(|v| vehicle_hits_player(player_x, cfg.player_width, v.x, length))
}
