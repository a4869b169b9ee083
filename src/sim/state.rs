//! Game state and core simulation types
//!
//! All state the simulation owns lives here: the lane sequence, the player,
//! the pending move queue, and the step-animation timestamps. The state is
//! a plain value driven by `submit` and `tick`; both take `&mut GameState`,
//! so input handling and frame processing can never interleave.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::movement::Direction;
use super::{lane::Lane, world};
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// The player was run over; terminal until reset
    GameOver,
}

/// Events surfaced to the presentation layer from a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A forward/backward step committed; `lane` is the new row counter
    Stepped { lane: usize },
    /// First collision detected; emitted exactly once per run
    GameOver,
}

/// The player-controlled character.
///
/// `lane`/`column` are the committed grid position. `pos` and `hop` are the
/// continuous animated position the renderer reads; they only diverge from
/// the grid while a step is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: usize,
    pub column: usize,
    /// Animated ground position (x across the board, y along it)
    pub pos: Vec2,
    /// Cosmetic vertical offset, peaking mid-step
    pub hop: f32,
}

impl Player {
    fn spawn(cfg: &Config) -> Self {
        let column = cfg.middle_column();
        Self {
            lane: 0,
            column,
            pos: Vec2::new(cfg.column_to_x(column), 0.0),
            hop: 0.0,
        }
    }

    /// Continuous position of the committed grid cell
    pub fn ground_position(&self, cfg: &Config) -> Vec2 {
        Vec2::new(cfg.column_to_x(self.column), cfg.lane_to_y(self.lane as i32))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Contiguous lane sequence; `lanes[i].index == i`
    pub lanes: Vec<Lane>,
    pub player: Player,
    /// Pending directional commands, consumed strictly FIFO
    pub moves: VecDeque<Direction>,
    pub phase: GamePhase,
    /// Set when an accepted move should start animating on the next tick
    pub(crate) arm_step: bool,
    /// Start timestamp of the in-flight step, if any
    pub(crate) step_start: Option<f64>,
    /// Timestamp of the previous tick, for delta measurement
    pub(crate) previous_timestamp: Option<f64>,
}

impl GameState {
    /// Create a fresh game from a seed and configuration.
    pub fn new(seed: u64, config: Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lanes = world::generate(&config, &mut rng);
        let player = Player::spawn(&config);
        Self {
            config,
            seed,
            rng,
            lanes,
            player,
            moves: VecDeque::new(),
            phase: GamePhase::Playing,
            arm_step: false,
            step_start: None,
            previous_timestamp: None,
        }
    }

    /// Hard reset (the retry operation): rebuild the lane sequence, put the
    /// player back at the start, drop all pending moves and timestamps.
    /// Runs atomically under `&mut self`; no tick can observe a half-reset
    /// state. The RNG stream continues, so retries vary within one seeded
    /// session.
    pub fn reset(&mut self) {
        self.lanes = world::generate(&self.config, &mut self.rng);
        self.player = Player::spawn(&self.config);
        self.moves.clear();
        self.arm_step = false;
        self.step_start = None;
        self.previous_timestamp = None;
        self.phase = GamePhase::Playing;
        log::info!("game reset, seed {}", self.seed);
    }

    /// Highest generated lane index
    pub fn frontier(&self) -> usize {
        self.lanes.len() - 1
    }

    /// Row counter shown as the score: the player's current lane
    pub fn lane_counter(&self) -> usize {
        self.player.lane
    }
}
