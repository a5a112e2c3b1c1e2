//! HUD derived from game state
//!
//! Which texts and entities are visible in each phase, and what they say.
//! Recomputed on every phase change and pushed to the stage.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

pub const TITLE: &str = "Sky Hopper+";
pub const START_HINT: &str = "Tap / Space to Start";
pub const RESTART_HINT: &str = "Tap / Space to Restart";
pub const PAUSED_TITLE: &str = "Paused";
pub const RESUME_HINT: &str = "Press P to Resume";

/// Title font sizes
pub const TITLE_FONT_SIZE: f32 = 60.0;
pub const GAME_OVER_FONT_SIZE: f32 = 50.0;

/// Visibility and text for every presentational element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub title_visible: bool,
    pub instruction_visible: bool,
    pub score_visible: bool,
    pub best_visible: bool,
    pub player_visible: bool,
    pub floor_visible: bool,

    pub title: String,
    pub title_font_size: f32,
    pub instruction: String,
    pub score: String,
    pub best: String,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let phase = state.phase;
        let menu = matches!(phase, GamePhase::Start | GamePhase::GameOver | GamePhase::Paused);
        let in_run = matches!(phase, GamePhase::Playing | GamePhase::Paused);

        let (title, instruction) = match phase {
            GamePhase::Paused => (PAUSED_TITLE.to_string(), RESUME_HINT.to_string()),
            GamePhase::GameOver => (
                format!("Game Over\nScore: {}", state.score),
                RESTART_HINT.to_string(),
            ),
            GamePhase::Start | GamePhase::Playing => (TITLE.to_string(), START_HINT.to_string()),
        };

        let title_font_size = if phase == GamePhase::GameOver {
            GAME_OVER_FONT_SIZE
        } else {
            TITLE_FONT_SIZE
        };

        Self {
            title_visible: menu,
            instruction_visible: menu,
            score_visible: in_run,
            best_visible: in_run || phase == GamePhase::Start,
            player_visible: phase != GamePhase::Start,
            floor_visible: phase != GamePhase::Start,
            title,
            title_font_size,
            instruction,
            score: score_text(state.score),
            best: best_text(state.best_score),
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn best_text(best: u32) -> String {
    format!("Best: {}", best)
}
