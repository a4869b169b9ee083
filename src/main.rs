//! Lane Hopper demo entry point
//!
//! Headless driver: seeds a game, runs a small scripted bot at a simulated
//! 60 Hz display cadence, and logs how far it gets. Useful for exercising
//! the whole core without a renderer.
//!
//! Usage: `lane-hopper [seed] [config.json]`

use lane_hopper::config::Config;
use lane_hopper::sim::{Direction, GameEvent, GamePhase, GameState, LaneKind, submit, tick};

/// 10 minutes of simulated frames at 60 Hz
const MAX_FRAMES: u64 = 36_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE_u64);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    log::info!("starting demo run, seed {seed}");
    let mut state = GameState::new(seed, config);

    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    let mut best_lane = 0;

    for frame in 0..MAX_FRAMES {
        if state.phase == GamePhase::Playing && state.moves.is_empty() {
            plan_move(&mut state, frame);
        }

        for event in tick(&mut state, now) {
            match event {
                GameEvent::Stepped { lane } => {
                    best_lane = best_lane.max(lane);
                    log::debug!("lane counter {lane}");
                }
                GameEvent::GameOver => log::info!("run over on frame {frame}"),
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
        now += frame_ms;
    }

    log::info!(
        "demo finished: lane counter {}, best lane {}",
        state.lane_counter(),
        best_lane
    );
}

fn load_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Config::from_json(&json)?)
}

/// Pick the bot's next command: forward when the row ahead looks safe,
/// otherwise sidestep (alternating sides), otherwise retreat. Rejected
/// submissions are silent no-ops, so just try in order until one queues.
fn plan_move(state: &mut GameState, frame: u64) {
    if forward_looks_safe(state) {
        submit(state, Direction::Forward);
        if !state.moves.is_empty() {
            return;
        }
    }

    let (first, second) = if frame % 2 == 0 {
        (Direction::Left, Direction::Right)
    } else {
        (Direction::Right, Direction::Left)
    };
    for direction in [first, second, Direction::Backward] {
        submit(state, direction);
        if !state.moves.is_empty() {
            return;
        }
    }
}

/// Crude hazard check: don't step onto a road row while any of its
/// vehicles is near the player's column.
fn forward_looks_safe(state: &GameState) -> bool {
    let ahead = &state.lanes[state.player.lane + 1];
    let LaneKind::Road { vehicles, .. } = &ahead.kind else {
        return true;
    };
    let player_x = state.config.column_to_x(state.player.column);
    let clearance = state.config.grid_cell * 3.0;
    vehicles.iter().all(|v| (v.x - player_x).abs() > clearance)
}
