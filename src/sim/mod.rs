//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - Randomness only through `RandomSource`
//! - Stable iteration order (spawn order, stable entity IDs)
//! - Side effects reported as `GameEvent`s

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Aabb, intersects};
pub use difficulty::{next_spawn_cooldown, spawn_speed_factor, speed_for_score};
pub use effects::{spawn_jump_effect, update_jump_effects};
pub use obstacles::{spawn_obstacle, update_obstacles};
pub use physics::{jump, update_player};
pub use rng::RandomSource;
pub use state::{EntityId, GameEvent, GamePhase, GameState, JumpEffect, Obstacle, Player};
pub use tick::{TickInput, primary_action, tick, toggle_pause, update};
