//! Scoring and difficulty ramps
//!
//! Pure functions of the run state. Both ramps are monotonic in score and
//! independently capped.

use super::rng::RandomSource;
use crate::consts::*;
use crate::tuning::Tuning;

/// Scroll speed for a score: linear ramp from `base_speed`, capped at `max_speed`
pub fn speed_for_score(tuning: &Tuning, score: u32) -> f32 {
    (tuning.base_speed + score as f32 * SPEED_PER_POINT).min(tuning.max_speed)
}

/// Multiplier applied to the spawn interval; shrinks with score down to a floor
pub fn spawn_speed_factor(score: u32) -> f32 {
    (1.0 - score as f32 * SPAWN_SHRINK_PER_POINT).max(SPAWN_FACTOR_FLOOR)
}

/// Frames to wait before the next spawn
pub fn next_spawn_cooldown<R: RandomSource + ?Sized>(tuning: &Tuning, score: u32, rng: &mut R) -> u32 {
    let nominal = rng.uniform(tuning.spawn_delay_min, tuning.spawn_delay_max);
    (nominal * spawn_speed_factor(score)).floor().max(0.0) as u32
}
