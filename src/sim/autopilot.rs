//! Demo/attract-mode driver
//!
//! Decides when to press the primary action so the game can play itself:
//! restart from the menus, jump ahead of the next obstacle, and spend the
//! second jump at the apex while an obstacle is still underneath.

use super::state::{GamePhase, GameState};

/// Frames of lead time between the jump and the obstacle reaching the player
const LEAD_FRAMES: f32 = 15.0;

/// Whether the autopilot wants to press the primary action this frame
pub fn wants_primary(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => should_jump(state),
        GamePhase::Paused => false,
    }
}

/// Jump decision while playing
pub fn should_jump(state: &GameState) -> bool {
    let player = &state.player;
    if player.jumps_used >= state.tuning.max_jumps {
        return false;
    }

    let trigger = state.current_speed * LEAD_FRAMES;
    let bounds = player.bounds();
    let threat = state
        .obstacles
        .iter()
        .filter(|o| !state.passed.contains(&o.id))
        .map(|o| o.bounds())
        .filter(|b| b.right() > bounds.left())
        .map(|b| b.left() - bounds.right())
        .any(|gap| gap <= trigger);

    if !threat {
        return false;
    }

    if player.jumps_used == 0 {
        // Only launch from the ground
        !player.is_jumping
    } else {
        // Second jump once the first one stops rising
        player.vel.y >= 0.0
    }
}
