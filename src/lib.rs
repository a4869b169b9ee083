//! Lane Hopper - an endless lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lane generation, movement, traffic,
//!   collisions, the per-frame tick)
//! - `config`: Injectable gameplay constants
//!
//! Rendering, camera framing, UI and raw input capture are external
//! collaborators: they feed `Direction` commands into [`sim::submit()`] and
//! read positions and events back from [`sim::tick()`].

pub mod config;
pub mod sim;

pub use config::Config;
pub use sim::{Direction, GameEvent, GamePhase, GameState, submit, tick};
