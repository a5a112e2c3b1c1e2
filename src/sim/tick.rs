//! Per-frame simulation tick and phase transitions
//!
//! The host calls `tick` once per frame with the edge-triggered inputs
//! collected since the previous frame.

use super::autopilot;
use super::effects::update_jump_effects;
use super::obstacles::{spawn_obstacle, update_obstacles};
use super::physics::{jump, update_player};
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary action (tap/click/space)
    pub primary: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the autopilot supplies the primary action
    pub idle_mode: bool,
}

/// Handle the primary action for the current phase
pub fn primary_action(state: &mut GameState) {
    match state.phase {
        GamePhase::Start => state.start_run(),
        GamePhase::Playing => {
            jump(state);
        }
        GamePhase::GameOver => state.return_to_start(),
        GamePhase::Paused => {}
    }
}

/// Toggle between Playing and Paused; ignored in every other phase
pub fn toggle_pause(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing => state.set_phase(GamePhase::Paused),
        GamePhase::Paused => state.set_phase(GamePhase::Playing),
        GamePhase::Start | GamePhase::GameOver => {}
    }
}

/// Apply this frame's inputs, then advance the simulation by `delta` frames
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, input: &TickInput, delta: f32, rng: &mut R) {
    let mut input = *input;
    if input.idle_mode && autopilot::wants_primary(state) {
        input.primary = true;
    }

    if input.primary {
        primary_action(state);
    }
    if input.pause {
        toggle_pause(state);
    }

    update(state, delta, rng);
}

/// Advance one frame of gameplay; a no-op outside the Playing phase
pub fn update<R: RandomSource + ?Sized>(state: &mut GameState, delta: f32, rng: &mut R) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    update_player(&mut state.player, &state.tuning, delta);
    update_obstacles(state, delta);

    // Collision froze the run mid-frame
    if state.phase != GamePhase::Playing {
        return;
    }

    spawn_obstacle(state, rng);
    update_jump_effects(state, delta);
    state.floor_offset -= state.current_speed * delta;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, Obstacle};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const PRIMARY: TickInput = TickInput {
        primary: true,
        pause: false,
        idle_mode: false,
    };
    const PAUSE: TickInput = TickInput {
        primary: false,
        pause: true,
        idle_mode: false,
    };

    fn new_state() -> (GameState, Pcg32) {
        (GameState::new(Tuning::default(), 0), Pcg32::seed_from_u64(12345))
    }

    #[test]
    fn test_start_to_playing() {
        let (mut state, mut rng) = new_state();

        // Tick without input - should stay on the start screen
        tick(&mut state, &TickInput::default(), 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
        // Cooldown starts at zero, so the first frame spawns
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_primary_jumps_while_playing() {
        let (mut state, mut rng) = new_state();
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        assert_eq!(state.player.jumps_used, 1);
        assert!(state.player.pos.y < state.ground_y());
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut state, mut rng) = new_state();
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        tick(&mut state, &PRIMARY, 1.0, &mut rng);

        tick(&mut state, &PAUSE, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen_y = state.player.pos.y;
        let frozen_x = state.obstacles[0].pos.x;
        let frozen_ticks = state.time_ticks;

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), 1.0, &mut rng);
        }
        // Primary does nothing while paused
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        assert_eq!(state.player.pos.y, frozen_y);
        assert_eq!(state.obstacles[0].pos.x, frozen_x);
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.player.jumps_used, 1);

        // Resume without reset
        tick(&mut state, &PAUSE, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, frozen_ticks + 1);
        assert_eq!(state.player.jumps_used, 1);
    }

    #[test]
    fn test_pause_ignored_outside_play() {
        let (mut state, mut rng) = new_state();
        tick(&mut state, &PAUSE, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Start);

        state.set_phase(GamePhase::GameOver);
        tick(&mut state, &PAUSE, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_collision_to_game_over_and_back() {
        let (mut state, mut rng) = new_state();
        state.best_score = 2;
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        state.score = 5;

        // Obstacle sitting on the player's footprint
        let id = state.next_entity_id();
        let player = state.player.clone();
        state.obstacles.insert(
            0,
            Obstacle {
                id,
                pos: Vec2::new(player.pos.x + state.current_speed, player.pos.y),
                width: player.width,
                height: player.height,
            },
        );
        state.drain_events();

        tick(&mut state, &TickInput::default(), 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 5);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::NewBest(5)));
        assert!(events.contains(&GameEvent::Collided(id)));

        // Frozen while game over
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), 1.0, &mut rng);
        assert_eq!(state.time_ticks, ticks);

        // Back to start resets run objects and the player
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.obstacles.is_empty());
        assert!(state.effects.is_empty());
        assert!(state.passed.is_empty());
        assert_eq!(state.player.pos.y, state.ground_y());

        // And a fresh run starts from zero
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.current_speed, state.tuning.base_speed);
        assert_eq!(state.best_score, 5);
    }

    #[test]
    fn test_floor_scrolls_with_speed() {
        let (mut state, mut rng) = new_state();
        tick(&mut state, &PRIMARY, 1.0, &mut rng);
        tick(&mut state, &TickInput::default(), 0.5, &mut rng);
        assert!((state.floor_offset + 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed should produce identical results
        let (mut state1, mut rng1) = new_state();
        let (mut state2, mut rng2) = new_state();

        let mut inputs = vec![PRIMARY];
        for i in 0..600 {
            inputs.push(TickInput {
                primary: i % 37 == 0,
                ..Default::default()
            });
        }

        for input in &inputs {
            tick(&mut state1, input, 1.0, &mut rng1);
            tick(&mut state2, input, 1.0, &mut rng2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
        for (a, b) in state1.obstacles.iter().zip(&state2.obstacles) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.width, b.width);
        }
    }
}
