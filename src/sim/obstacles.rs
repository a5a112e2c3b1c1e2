//! Obstacle spawning, movement, collision, scoring and culling

use glam::Vec2;

use super::difficulty::next_spawn_cooldown;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::*;

/// Spawn an obstacle at the right edge, or count down the cooldown
///
/// One branch per tick: a tick that decrements never spawns.
pub fn spawn_obstacle<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.spawn_cooldown > 0 {
        state.spawn_cooldown -= 1;
        return;
    }

    let tuning = &state.tuning;
    let height = rng.uniform(tuning.obstacle_height.0, tuning.obstacle_height.1);
    let width = rng.uniform(tuning.obstacle_width.0, tuning.obstacle_width.1);
    let pos = Vec2::new(tuning.screen_width + SPAWN_OFFSET_X, tuning.ground_y());

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos,
        width,
        height,
    });
    state.events.push(GameEvent::ObstacleSpawned(id));

    state.spawn_cooldown = next_spawn_cooldown(&state.tuning, state.score, rng);
    log::debug!(
        "Spawned obstacle {} ({:.0}x{:.0}), next in {} frames",
        id,
        width,
        height,
        state.spawn_cooldown
    );
}

/// Move every obstacle, then resolve collision, scoring and culling for it
///
/// A collision ends the run and drops that obstacle; obstacles after it in the
/// list are left untouched for the frozen game-over frame.
pub fn update_obstacles(state: &mut GameState, delta: f32) {
    let obstacles = std::mem::take(&mut state.obstacles);
    let mut kept = Vec::with_capacity(obstacles.len());
    let mut remaining = obstacles.into_iter();

    while let Some(mut obstacle) = remaining.next() {
        obstacle.pos.x -= state.current_speed * delta;

        let player = state.player.bounds();
        if player.intersects(&obstacle.bounds()) {
            log::info!("Collided with obstacle {} at score {}", obstacle.id, state.score);
            state.events.push(GameEvent::Collided(obstacle.id));
            state.events.push(GameEvent::ObstacleRemoved(obstacle.id));
            state.end_run();
            kept.extend(remaining);
            break;
        }

        if obstacle.trailing_edge() < player.left() {
            state.credit(obstacle.id);
        }

        if obstacle.pos.x < CULL_X {
            state.passed.remove(&obstacle.id);
            state.events.push(GameEvent::ObstacleRemoved(obstacle.id));
            continue;
        }

        kept.push(obstacle);
    }

    state.obstacles = kept;
}
