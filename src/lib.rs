//! Sky Hopper - A side-scrolling double-jump reflex game
//!
//! Core modules:
//! - `sim`: Simulation (phases, physics, obstacles, scoring)
//! - `game`: Owned game instance wiring the simulation to its collaborators
//! - `stage`: Presentation capability (rendering lives outside this crate)
//! - `persistence`: Key-value storage for the best score
//! - `platform`: Input event mapping
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod stage;
pub mod tuning;
pub mod ui;

pub use best_score::BestScore;
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Obstacles spawn this far past the right edge of the screen
    pub const SPAWN_OFFSET_X: f32 = 60.0;
    /// Obstacles left of this x are culled
    pub const CULL_X: f32 = -120.0;

    /// Obstacle size ranges (uniform draw at spawn)
    pub const OBSTACLE_HEIGHT_MIN: f32 = 70.0;
    pub const OBSTACLE_HEIGHT_MAX: f32 = 130.0;
    pub const OBSTACLE_WIDTH_MIN: f32 = 40.0;
    pub const OBSTACLE_WIDTH_MAX: f32 = 70.0;

    /// Score gained per cleared obstacle
    pub const SCORE_PER_OBSTACLE: u32 = 1;
    /// Scroll speed added per point of score
    pub const SPEED_PER_POINT: f32 = 0.12;
    /// Spawn interval shrink per point of score
    pub const SPAWN_SHRINK_PER_POINT: f32 = 0.01;
    /// Spawn interval never shrinks below this fraction of nominal
    pub const SPAWN_FACTOR_FLOOR: f32 = 0.7;

    /// Jump effect defaults
    pub const EFFECT_START_OPACITY: f32 = 0.8;
    pub const EFFECT_WIDTH: f32 = 60.0;
    /// Effect spawns this far above the player's feet
    pub const EFFECT_LIFT: f32 = 10.0;
    /// Per-frame decay rates (scaled by delta)
    pub const EFFECT_FADE_RATE: f32 = 0.03;
    pub const EFFECT_RISE_RATE: f32 = 1.2;
    pub const EFFECT_GROW_RATE: f32 = 0.02;

    /// Storage key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "sky_hopper_best";
}
