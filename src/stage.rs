//! Presentation capability
//!
//! Rendering lives outside this crate. A `Stage` receives entity lifecycle
//! calls and HUD updates; every method defaults to a no-op so a backend only
//! implements what it can display.

use crate::sim::{EntityId, JumpEffect, Obstacle, Player};
use crate::ui::Hud;

pub trait Stage {
    /// A new obstacle entered the world
    fn add_obstacle(&mut self, _obstacle: &Obstacle) {}

    /// A new jump effect was emitted
    fn add_effect(&mut self, _effect: &JumpEffect) {}

    /// Obstacle or effect destroyed
    fn remove_entity(&mut self, _id: EntityId) {}

    /// Positions, opacity and scale after a simulated frame
    fn sync_entities(&mut self, _player: &Player, _obstacles: &[Obstacle], _effects: &[JumpEffect]) {}

    /// Visibility and text after a phase or score change
    fn show_hud(&mut self, _hud: &Hud) {}

    /// Floor tiling offset for scroll feedback
    fn scroll_floor(&mut self, _offset: f32) {}
}

/// Headless stage that displays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStage;

impl Stage for NullStage {}
