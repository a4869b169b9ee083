//! World construction and growth
//!
//! The world is a contiguous, append-only sequence of lanes where
//! `lanes[i].index == i`. A symmetric pre-roll window is generated at start
//! so the world begins with the same random draws the presentation layer
//! would have consumed; the negative rows are discarded immediately.

use rand_pcg::Pcg32;

use super::lane::Lane;
use crate::config::Config;

/// Build the starting lane sequence: rows `-pregen_rows..=pregen_rows`,
/// keeping only the playable rows (index >= 0). Row 0 is always a field.
pub fn generate(cfg: &Config, rng: &mut Pcg32) -> Vec<Lane> {
    (-cfg.pregen_rows..=cfg.pregen_rows)
        .map(|index| Lane::generate(index, cfg, rng))
        .filter(|lane| lane.index >= 0)
        .collect()
}

/// Append exactly one lane at the current frontier + 1.
///
/// Called synchronously for every accepted forward command, before the move
/// is queued, so queued-move projections can never reference a lane that
/// does not exist yet.
pub fn extend(lanes: &mut Vec<Lane>, cfg: &Config, rng: &mut Pcg32) {
    let index = lanes.len() as i32;
    lanes.push(Lane::generate(index, cfg, rng));
}
