//! Game state and core simulation types
//!
//! Everything a run needs lives in `GameState`; the presentation layer only
//! ever sees it through `GameEvent`s and read-only borrows.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Stable identifier assigned to obstacles and effects at spawn
pub type EntityId = u32;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first input
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// Something that happened during a tick or transition
///
/// Drained by the owner of the state to drive presentation and persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Jumped { jumps_used: u32 },
    ObstacleSpawned(EntityId),
    /// Obstacle cleared the player; carries the new score
    ObstacleCleared { id: EntityId, score: u32 },
    ObstacleRemoved(EntityId),
    EffectSpawned(EntityId),
    EffectExpired(EntityId),
    Collided(EntityId),
    /// Best score beaten at game over
    NewBest(u32),
}

/// The player character (bottom-center anchored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    /// Jumps spent since last touching the ground
    pub jumps_used: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_y()),
            vel: Vec2::ZERO,
            width: tuning.player_width,
            height: tuning.player_height,
            is_jumping: false,
            jumps_used: 0,
        }
    }

    /// Put the player back on the ground with a full jump budget
    pub fn reset(&mut self, ground_y: f32) {
        self.pos.y = ground_y;
        self.vel.y = 0.0;
        self.is_jumping = false;
        self.jumps_used = 0;
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }
}

/// A ground obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: EntityId,
    /// Bottom-center anchor; y stays on the ground line
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }

    /// Right edge, the last part of the obstacle to pass the player
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// Short-lived puff left behind by a jump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpEffect {
    pub id: EntityId,
    /// Center anchored
    pub pos: Vec2,
    pub width: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl JumpEffect {
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Score for the current (or last) run
    pub score: u32,
    /// Best score across runs
    pub best_score: u32,
    /// Scroll speed, ramps with score
    pub current_speed: f32,
    /// Frames until the next spawn is allowed
    pub spawn_cooldown: u32,
    /// Accumulated floor scroll (parallax feedback for the stage)
    pub floor_offset: f32,
    /// Playing ticks simulated this run
    pub time_ticks: u64,
    pub player: Player,
    /// Active obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Active jump effects, in spawn order
    pub effects: Vec<JumpEffect>,
    /// Obstacles already credited to the score
    pub passed: HashSet<EntityId>,
    /// Events not yet drained
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Create a state sitting on the start screen
    pub fn new(tuning: Tuning, best_score: u32) -> Self {
        let tuning = tuning.validated();
        Self {
            phase: GamePhase::Start,
            score: 0,
            best_score,
            current_speed: tuning.base_speed,
            spawn_cooldown: 0,
            floor_offset: 0.0,
            time_ticks: 0,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            effects: Vec::new(),
            passed: HashSet::new(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.tuning.ground_y()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Switch phase, resetting run objects when entering the start screen
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        self.phase = to;
        log::info!("Phase {:?} -> {:?}", from, to);
        self.events.push(GameEvent::PhaseChanged { from, to });

        if to == GamePhase::Start {
            self.reset_run_objects();
        }
    }

    /// Drop every obstacle and effect and forget scored obstacles
    pub fn reset_run_objects(&mut self) {
        for obstacle in self.obstacles.drain(..) {
            self.events.push(GameEvent::ObstacleRemoved(obstacle.id));
        }
        for effect in self.effects.drain(..) {
            self.events.push(GameEvent::EffectExpired(effect.id));
        }
        self.passed.clear();
        self.spawn_cooldown = 0;
    }

    pub fn reset_player(&mut self) {
        let ground_y = self.ground_y();
        self.player.reset(ground_y);
    }

    /// Begin a fresh run
    pub fn start_run(&mut self) {
        self.score = 0;
        self.current_speed = self.tuning.base_speed;
        self.floor_offset = 0.0;
        self.time_ticks = 0;
        self.reset_run_objects();
        self.reset_player();
        self.set_phase(GamePhase::Playing);
    }

    /// End the current run, recording a new best if it was beaten
    pub fn end_run(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            log::info!("New best score: {}", self.best_score);
            self.events.push(GameEvent::NewBest(self.best_score));
        }
        self.set_phase(GamePhase::GameOver);
    }

    /// Leave the game-over screen for the start screen
    pub fn return_to_start(&mut self) {
        self.set_phase(GamePhase::Start);
        self.reset_player();
    }

    /// Credit an obstacle exactly once; returns false if it was already scored
    pub fn credit(&mut self, id: EntityId) -> bool {
        if !self.passed.insert(id) {
            return false;
        }
        self.score += SCORE_PER_OBSTACLE;
        self.current_speed = super::difficulty::speed_for_score(&self.tuning, self.score);
        log::debug!("Obstacle {} cleared, score {}, speed {:.2}", id, self.score, self.current_speed);
        self.events.push(GameEvent::ObstacleCleared {
            id,
            score: self.score,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(id: EntityId, x: f32) -> Obstacle {
        Obstacle {
            id,
            pos: Vec2::new(x, 600.0),
            width: 50.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_new_state_on_start_screen() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.best_score, 7);
        assert_eq!(state.current_speed, 3.0);
        assert_eq!(state.player.pos, Vec2::new(150.0, 600.0));
        assert_eq!(state.player.width, 80.0);
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.score = 12;
        state.current_speed = 4.4;
        state.obstacles.push(obstacle(1, 300.0));
        state.passed.insert(1);
        state.player.pos.y = 400.0;
        state.player.jumps_used = 2;
        state.spawn_cooldown = 20;

        state.start_run();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.current_speed, state.tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert!(state.passed.is_empty());
        assert_eq!(state.spawn_cooldown, 0);
        assert_eq!(state.player.pos.y, state.ground_y());
        assert_eq!(state.player.jumps_used, 0);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ObstacleRemoved(1)));
        assert!(events.contains(&GameEvent::PhaseChanged {
            from: GamePhase::Start,
            to: GamePhase::Playing
        }));
    }

    #[test]
    fn test_credit_is_idempotent() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.start_run();

        assert!(state.credit(5));
        assert!(!state.credit(5));
        assert_eq!(state.score, 1);
        assert!((state.current_speed - 3.12).abs() < 1e-5);
    }

    #[test]
    fn test_end_run_records_only_strict_improvement() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start_run();
        state.score = 3;
        state.drain_events();
        state.end_run();
        assert_eq!(state.best_score, 3);
        assert!(!state.drain_events().iter().any(|e| matches!(e, GameEvent::NewBest(_))));

        state.start_run();
        state.score = 4;
        state.drain_events();
        state.end_run();
        assert_eq!(state.best_score, 4);
        assert!(state.drain_events().contains(&GameEvent::NewBest(4)));
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(Tuning::default(), 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }
}
