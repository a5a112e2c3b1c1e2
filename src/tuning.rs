//! Data-driven game balance
//!
//! Everything a designer might want to tweak without touching the simulation.
//! Loaded from JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Screen dimensions in screen units
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    /// Fixed horizontal position of the player
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    /// Jumps allowed before landing
    pub max_jumps: u32,

    // === Scrolling ===
    pub base_speed: f32,
    pub max_speed: f32,

    // === Spawning ===
    /// Nominal spawn interval range in frames
    pub spawn_delay_min: f32,
    pub spawn_delay_max: f32,
    pub obstacle_width: (f32, f32),
    pub obstacle_height: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,

            player_x: 150.0,
            player_width: 80.0,
            player_height: 80.0,
            gravity: 0.65,
            jump_power: -15.0,
            // Double jump
            max_jumps: 2,

            base_speed: 3.0,
            max_speed: 10.0,

            spawn_delay_min: 40.0,
            spawn_delay_max: 80.0,
            obstacle_width: (OBSTACLE_WIDTH_MIN, OBSTACLE_WIDTH_MAX),
            obstacle_height: (OBSTACLE_HEIGHT_MIN, OBSTACLE_HEIGHT_MAX),
        }
    }
}

impl Tuning {
    /// Ground line: the floor sits at the bottom of the screen
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height
    }

    /// Parse tuning from JSON and clamp it into a playable shape
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validated())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Fix up inverted ranges and speeds so the simulation invariants hold
    pub fn validated(mut self) -> Self {
        if self.spawn_delay_min > self.spawn_delay_max {
            std::mem::swap(&mut self.spawn_delay_min, &mut self.spawn_delay_max);
        }
        self.spawn_delay_min = self.spawn_delay_min.max(0.0);
        self.obstacle_width = ordered(self.obstacle_width);
        self.obstacle_height = ordered(self.obstacle_height);
        self.base_speed = self.base_speed.max(0.0);
        if self.max_speed < self.base_speed {
            log::warn!(
                "max_speed {} below base_speed {}, raising it",
                self.max_speed,
                self.base_speed
            );
            self.max_speed = self.base_speed;
        }
        self
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
