//! Lane types and procedural lane generation
//!
//! A lane is one row of the world: a safe field, a forest with tree
//! obstacles on a column occupancy set, or a road carrying a looping stream
//! of cars or trucks. Generation draws from the game's seeded RNG and
//! places obstacles with rejection sampling so no two share a slot.

use std::collections::BTreeSet;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// The two road obstacle classes. Trucks are longer and claim wider
/// starting slots so placements never overlap visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    Car,
    Truck,
}

impl VehicleClass {
    /// Starting-slot width in grid cells
    pub fn slot_width(&self) -> usize {
        match self {
            VehicleClass::Car => 2,
            VehicleClass::Truck => 3,
        }
    }

    /// Vehicles spawned per lane of this class
    pub fn count_per_lane(&self, cfg: &Config) -> usize {
        match self {
            VehicleClass::Car => cfg.cars_per_lane,
            VehicleClass::Truck => cfg.trucks_per_lane,
        }
    }

    /// Bounding length along the traffic axis
    pub fn length(&self, cfg: &Config) -> f32 {
        match self {
            VehicleClass::Car => cfg.car_length,
            VehicleClass::Truck => cfg.truck_length,
        }
    }
}

/// A single road obstacle. Only the continuous x position mutates after
/// creation; everything else about a lane is fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub x: f32,
}

/// What a lane is made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LaneKind {
    /// Open grass, always walkable
    Field,
    /// Grass with trees; occupied columns cannot be entered
    Forest { occupied: BTreeSet<usize> },
    /// Traffic lane; `heads_left` means motion toward negative x
    Road {
        class: VehicleClass,
        heads_left: bool,
        speed: f32,
        vehicles: Vec<Vehicle>,
    },
}

/// One row of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Row index; negative rows are pre-roll and never playable
    pub index: i32,
    pub kind: LaneKind,
}

impl Lane {
    /// Generate the lane at `index`. Rows at or below zero are always safe
    /// fields; above that the type is drawn uniformly from car/truck/forest.
    pub fn generate(index: i32, cfg: &Config, rng: &mut Pcg32) -> Self {
        if index <= 0 {
            return Self {
                index,
                kind: LaneKind::Field,
            };
        }
        let kind = match rng.random_range(0..3u8) {
            0 => Self::generate_road(VehicleClass::Car, cfg, rng),
            1 => Self::generate_road(VehicleClass::Truck, cfg, rng),
            _ => Self::generate_forest(cfg, rng),
        };
        Self { index, kind }
    }

    /// Place `forest_tree_count` trees at distinct columns.
    /// Requires tree count < columns or sampling cannot terminate.
    fn generate_forest(cfg: &Config, rng: &mut Pcg32) -> LaneKind {
        let mut occupied = BTreeSet::new();
        for _ in 0..cfg.forest_tree_count {
            loop {
                let column = rng.random_range(0..cfg.columns);
                if occupied.insert(column) {
                    break;
                }
            }
        }
        LaneKind::Forest { occupied }
    }

    /// Place this class's vehicle count at distinct starting slots, each
    /// slot `slot_width` cells wide, rejection-sampling against the slots
    /// already claimed in this lane.
    fn generate_road(class: VehicleClass, cfg: &Config, rng: &mut Pcg32) -> LaneKind {
        let heads_left = rng.random_bool(0.5);
        let speed = cfg.lane_speeds[rng.random_range(0..cfg.lane_speeds.len())];

        let slot_width = class.slot_width();
        let slot_count = cfg.columns.div_ceil(slot_width);
        let mut claimed = BTreeSet::new();
        let vehicles = (0..class.count_per_lane(cfg))
            .map(|_| {
                let slot = loop {
                    let candidate = rng.random_range(0..slot_count);
                    if claimed.insert(candidate) {
                        break candidate;
                    }
                };
                let x = (slot * slot_width) as f32 * cfg.grid_cell + cfg.grid_cell / 2.0
                    - cfg.board_width() / 2.0;
                Vehicle { x }
            })
            .collect();

        LaneKind::Road {
            class,
            heads_left,
            speed,
            vehicles,
        }
    }

    /// Whether the player can stand in `column` of this lane
    pub fn blocks_column(&self, column: usize) -> bool {
        match &self.kind {
            LaneKind::Forest { occupied } => occupied.contains(&column),
            _ => false,
        }
    }

    pub fn is_road(&self) -> bool {
        matches!(self.kind, LaneKind::Road { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_nonpositive_rows_are_fields() {
        let cfg = Config::default();
        for index in [-9, -1, 0] {
            let lane = Lane::generate(index, &cfg, &mut rng(7));
            assert_eq!(lane.kind, LaneKind::Field, "row {index}");
        }
    }

    #[test]
    fn test_forest_occupancy_cardinality() {
        let cfg = Config::default();
        let mut r = rng(11);
        // Generate until we see some forests, then inspect each
        let mut seen = 0;
        for index in 1..200 {
            let lane = Lane::generate(index, &cfg, &mut r);
            if let LaneKind::Forest { occupied } = &lane.kind {
                seen += 1;
                assert_eq!(occupied.len(), cfg.forest_tree_count);
                assert!(occupied.iter().all(|&c| c < cfg.columns));
            }
        }
        assert!(seen > 0, "no forest lanes in 200 draws");
    }

    #[test]
    fn test_road_slots_are_distinct() {
        let cfg = Config::default();
        let mut r = rng(23);
        let mut cars = 0;
        let mut trucks = 0;
        for index in 1..300 {
            let lane = Lane::generate(index, &cfg, &mut r);
            let LaneKind::Road {
                class, vehicles, ..
            } = &lane.kind
            else {
                continue;
            };
            let expected = class.count_per_lane(&cfg);
            assert_eq!(vehicles.len(), expected);
            // Distinct slots imply distinct starting x positions
            for (i, a) in vehicles.iter().enumerate() {
                for b in &vehicles[i + 1..] {
                    assert!((a.x - b.x).abs() >= cfg.grid_cell * class.slot_width() as f32);
                }
            }
            match class {
                VehicleClass::Car => cars += 1,
                VehicleClass::Truck => trucks += 1,
            }
        }
        assert!(cars > 0 && trucks > 0);
    }

    #[test]
    fn test_road_speed_from_discrete_set() {
        let cfg = Config::default();
        let mut r = rng(31);
        for index in 1..100 {
            let lane = Lane::generate(index, &cfg, &mut r);
            if let LaneKind::Road { speed, .. } = &lane.kind {
                assert!(cfg.lane_speeds.contains(speed));
            }
        }
    }

    #[test]
    fn test_vehicles_start_on_board() {
        let cfg = Config::default();
        let mut r = rng(43);
        let half = cfg.board_width() / 2.0;
        for index in 1..100 {
            let lane = Lane::generate(index, &cfg, &mut r);
            if let LaneKind::Road { vehicles, .. } = &lane.kind {
                for v in vehicles {
                    assert!(v.x >= -half && v.x <= half);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let cfg = Config::default();
        let mut a = rng(99);
        let mut b = rng(99);
        for index in -9..50 {
            assert_eq!(
                Lane::generate(index, &cfg, &mut a),
                Lane::generate(index, &cfg, &mut b)
            );
        }
    }
}
