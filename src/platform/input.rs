//! Edge-triggered input mapping
//!
//! Hosts report one `InputEvent` per user action; key codes follow the DOM
//! `KeyboardEvent.code` naming.

use crate::sim::{GamePhase, TickInput};

/// Key code for the primary action
pub const PRIMARY_KEY: &str = "Space";
/// Key code for the pause toggle
pub const PAUSE_KEY: &str = "KeyP";

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Tap or click anywhere on the stage
    PointerDown,
    /// Key press, by physical key code
    KeyDown(String),
}

impl InputEvent {
    pub fn key(code: &str) -> Self {
        InputEvent::KeyDown(code.to_string())
    }
}

/// Translate an event into tick input for the current phase
///
/// Pause is not offered on the start screen. Unknown keys map to no input.
pub fn tick_input_for(event: &InputEvent, phase: GamePhase) -> TickInput {
    match event {
        InputEvent::PointerDown => TickInput {
            primary: true,
            ..Default::default()
        },
        InputEvent::KeyDown(code) if code == PRIMARY_KEY => TickInput {
            primary: true,
            ..Default::default()
        },
        InputEvent::KeyDown(code) if code == PAUSE_KEY && phase != GamePhase::Start => TickInput {
            pause: true,
            ..Default::default()
        },
        InputEvent::KeyDown(_) => TickInput::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_sources() {
        assert!(tick_input_for(&InputEvent::PointerDown, GamePhase::Start).primary);
        assert!(tick_input_for(&InputEvent::key("Space"), GamePhase::Playing).primary);
    }

    #[test]
    fn test_pause_gated_on_start_screen() {
        assert!(!tick_input_for(&InputEvent::key("KeyP"), GamePhase::Start).pause);
        assert!(tick_input_for(&InputEvent::key("KeyP"), GamePhase::Playing).pause);
        assert!(tick_input_for(&InputEvent::key("KeyP"), GamePhase::Paused).pause);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let input = tick_input_for(&InputEvent::key("KeyQ"), GamePhase::Playing);
        assert!(!input.primary && !input.pause);
    }
}
