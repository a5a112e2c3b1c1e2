//! Player physics: jumping and vertical integration
//!
//! Rates are per reference frame; `delta` scales them, so the simulation is
//! frame-rate proportional rather than fixed-timestep.

use super::effects::spawn_jump_effect;
use super::state::{GameEvent, GameState, Player};
use crate::tuning::Tuning;

/// Attempt a jump; dropped silently once the jump budget is spent
pub fn jump(state: &mut GameState) -> bool {
    let tuning = &state.tuning;
    let player = &mut state.player;
    if player.jumps_used >= tuning.max_jumps {
        return false;
    }

    player.vel.y = tuning.jump_power;
    player.is_jumping = true;
    player.jumps_used += 1;

    let jumps_used = player.jumps_used;
    state.events.push(GameEvent::Jumped { jumps_used });
    spawn_jump_effect(state);
    true
}

/// Semi-implicit Euler step with the ground acting as a floor
pub fn update_player(player: &mut Player, tuning: &Tuning, delta: f32) {
    player.vel.y += tuning.gravity * delta;
    player.pos.y += player.vel.y * delta;

    let ground_y = tuning.ground_y();
    if player.pos.y >= ground_y {
        // Landing restores the jump budget
        player.pos.y = ground_y;
        player.vel.y = 0.0;
        player.is_jumping = false;
        player.jumps_used = 0;
    }
}
