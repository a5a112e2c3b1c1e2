//! Jump feedback effects
//!
//! Purely cosmetic: effects fade, rise and grow, then expire. Nothing in the
//! gameplay reads them.

use glam::Vec2;

use super::state::{GameEvent, GameState, JumpEffect};
use crate::consts::*;

/// Spawn an effect just above the player's feet
pub fn spawn_jump_effect(state: &mut GameState) {
    let id = state.next_entity_id();
    let pos = Vec2::new(state.player.pos.x, state.player.pos.y - EFFECT_LIFT);
    state.effects.push(JumpEffect {
        id,
        pos,
        width: EFFECT_WIDTH,
        opacity: EFFECT_START_OPACITY,
        scale: 1.0,
    });
    state.events.push(GameEvent::EffectSpawned(id));
}

/// Advance every effect and drop the ones that faded out
pub fn update_jump_effects(state: &mut GameState, delta: f32) {
    let events = &mut state.events;
    state.effects.retain_mut(|effect| {
        effect.opacity -= EFFECT_FADE_RATE * delta;
        effect.pos.y -= EFFECT_RISE_RATE * delta;
        effect.scale += EFFECT_GROW_RATE * delta;

        if effect.is_expired() {
            events.push(GameEvent::EffectExpired(effect.id));
            return false;
        }
        true
    });
}
