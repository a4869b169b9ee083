//! Gameplay constants, injectable rather than baked into the core
//!
//! Defaults reproduce the classic board: a 17-column grid of 42-unit cells,
//! 200 ms steps, three traffic speeds. Partial JSON overrides are supported
//! via `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// All tunable gameplay constants.
///
/// The simulation core never hardcodes geometry or timing; everything flows
/// through this struct so tests and embedders can reshape the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of one grid cell (world units)
    pub grid_cell: f32,
    /// Number of columns across the board
    pub columns: usize,
    /// Duration of one discrete step animation (milliseconds)
    pub step_duration_ms: f64,
    /// Peak height of the cosmetic hop at mid-step
    pub hop_amplitude: f32,
    /// Player bounding width along the traffic axis
    pub player_width: f32,
    /// Rows generated on each side of lane 0 at world start
    pub pregen_rows: i32,
    /// Trees placed in a forest lane
    pub forest_tree_count: usize,
    /// Vehicles placed in a car lane
    pub cars_per_lane: usize,
    /// Vehicles placed in a truck lane
    pub trucks_per_lane: usize,
    /// Car bounding length along the traffic axis
    pub car_length: f32,
    /// Truck bounding length along the traffic axis
    pub truck_length: f32,
    /// Discrete set of lane speeds (units per reference frame)
    pub lane_speeds: Vec<f32>,
    /// Reference frame length the speed set is expressed against (ms)
    pub speed_frame_ms: f32,
    /// Extra cells beyond the board edge before a vehicle wraps
    pub wrap_margin_cells: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_cell: 42.0,
            columns: 17,
            step_duration_ms: 200.0,
            hop_amplitude: 8.0,
            player_width: 15.0,
            pregen_rows: 9,
            forest_tree_count: 4,
            cars_per_lane: 3,
            trucks_per_lane: 2,
            car_length: 60.0,
            truck_length: 105.0,
            lane_speeds: vec![2.0, 2.5, 3.0],
            speed_frame_ms: 16.0,
            wrap_margin_cells: 2.0,
        }
    }
}

impl Config {
    /// Total board width (columns * cell)
    pub fn board_width(&self) -> f32 {
        self.grid_cell * self.columns as f32
    }

    /// Continuous x of a column center, with the board centered on x = 0
    pub fn column_to_x(&self, column: usize) -> f32 {
        column as f32 * self.grid_cell + self.grid_cell / 2.0 - self.board_width() / 2.0
    }

    /// Continuous y of a lane's row
    pub fn lane_to_y(&self, lane: i32) -> f32 {
        lane as f32 * self.grid_cell
    }

    /// Starting column for the player
    pub fn middle_column(&self) -> usize {
        self.columns / 2
    }

    /// Parse a config from JSON; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_geometry() {
        let cfg = Config::default();
        assert_eq!(cfg.board_width(), 42.0 * 17.0);
        // Middle column sits at x = 0 on an odd-width board
        assert!(cfg.column_to_x(cfg.middle_column()).abs() < 0.001);
        // Column centers are one cell apart
        assert!((cfg.column_to_x(1) - cfg.column_to_x(0) - cfg.grid_cell).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_override() {
        let cfg = Config::from_json(r#"{ "columns": 11, "step_duration_ms": 150.0 }"#).unwrap();
        assert_eq!(cfg.columns, 11);
        assert_eq!(cfg.step_duration_ms, 150.0);
        // Everything else keeps its default
        assert_eq!(cfg.grid_cell, 42.0);
        assert_eq!(cfg.lane_speeds, vec![2.0, 2.5, 3.0]);
    }
}
