//! Continuous vehicle motion
//!
//! Every tick, each road lane's vehicles advance along x by elapsed time
//! times the lane speed, independent of player state. A vehicle that has
//! drifted past the trailing edge (half the board plus a margin) teleports
//! to the leading edge, producing an endless looping stream. On the wrap
//! frame the vehicle only teleports; it does not also advance.

use super::lane::{Lane, LaneKind};
use crate::config::Config;

/// Advance all road-lane vehicles by `delta_ms` of wall-clock time.
pub fn advance(lanes: &mut [Lane], cfg: &Config, delta_ms: f32) {
    let margin = cfg.grid_cell * cfg.wrap_margin_cells;
    let left_edge = -cfg.board_width() / 2.0 - margin;
    let right_edge = cfg.board_width() / 2.0 + margin;

    for lane in lanes.iter_mut() {
        let LaneKind::Road {
            heads_left,
            speed,
            vehicles,
            ..
        } = &mut lane.kind
        else {
            continue;
        };

        let step = *speed / cfg.speed_frame_ms * delta_ms;
        for vehicle in vehicles.iter_mut() {
            if *heads_left {
                if vehicle.x < left_edge {
                    vehicle.x = right_edge;
                } else {
                    vehicle.x -= step;
                }
            } else if vehicle.x > right_edge {
                vehicle.x = left_edge;
            } else {
                vehicle.x += step;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lane::{Vehicle, VehicleClass};

    fn road_lane(heads_left: bool, speed: f32, xs: &[f32]) -> Lane {
        Lane {
            index: 1,
            kind: LaneKind::Road {
                class: VehicleClass::Car,
                heads_left,
                speed,
                vehicles: xs.iter().map(|&x| Vehicle { x }).collect(),
            },
        }
    }

    fn vehicle_xs(lane: &Lane) -> Vec<f32> {
        match &lane.kind {
            LaneKind::Road { vehicles, .. } => vehicles.iter().map(|v| v.x).collect(),
            _ => panic!("not a road lane"),
        }
    }

    #[test]
    fn test_advance_scales_with_delta_and_speed() {
        let cfg = Config::default();
        let mut lanes = [road_lane(false, 2.0, &[0.0]), road_lane(true, 3.0, &[0.0])];
        advance(&mut lanes, &cfg, 32.0);
        // speed / 16 ms * delta
        assert!((vehicle_xs(&lanes[0])[0] - 4.0).abs() < 0.001);
        assert!((vehicle_xs(&lanes[1])[0] + 6.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_delta_moves_nothing() {
        let cfg = Config::default();
        let mut lanes = [road_lane(false, 3.0, &[10.0, -20.0])];
        advance(&mut lanes, &cfg, 0.0);
        assert_eq!(vehicle_xs(&lanes[0]), vec![10.0, -20.0]);
    }

    #[test]
    fn test_wrap_teleports_to_opposite_edge() {
        let cfg = Config::default();
        let margin = cfg.grid_cell * cfg.wrap_margin_cells;
        let right_edge = cfg.board_width() / 2.0 + margin;
        let left_edge = -right_edge;

        // Leftward vehicle past the left edge comes back on the right
        let mut lanes = [road_lane(true, 2.0, &[left_edge - 1.0])];
        advance(&mut lanes, &cfg, 16.0);
        assert_eq!(vehicle_xs(&lanes[0])[0], right_edge);

        // Rightward vehicle past the right edge comes back on the left
        let mut lanes = [road_lane(false, 2.0, &[right_edge + 1.0])];
        advance(&mut lanes, &cfg, 16.0);
        assert_eq!(vehicle_xs(&lanes[0])[0], left_edge);
    }

    #[test]
    fn test_field_and_forest_lanes_untouched() {
        let cfg = Config::default();
        let mut lanes = [Lane {
            index: 0,
            kind: LaneKind::Field,
        }];
        advance(&mut lanes, &cfg, 100.0);
        assert_eq!(lanes[0].kind, LaneKind::Field);
    }
}
