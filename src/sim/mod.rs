//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single-threaded: commands and ticks both take `&mut GameState`
//! - No rendering or platform dependencies

pub mod collision;
pub mod lane;
pub mod movement;
pub mod state;
pub mod tick;
pub mod traffic;
pub mod world;

pub use collision::{intervals_overlap, player_run_over, vehicle_hits_player};
pub use lane::{Lane, LaneKind, Vehicle, VehicleClass};
pub use movement::{Direction, projected_position, submit};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{hop_height, tick};
