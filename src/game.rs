//! Owned game instance
//!
//! Wires the simulation to its collaborators: the stage for presentation,
//! a key-value store for the best score and a random source for spawning.
//! The host owns one `Game` and calls `update` once per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::best_score::BestScore;
use crate::persistence::KeyValueStore;
use crate::platform::{InputEvent, tick_input_for};
use crate::sim::{self, GameEvent, GamePhase, GameState, RandomSource, TickInput};
use crate::stage::{NullStage, Stage};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Game instance holding all state
pub struct Game<S, P = NullStage, R = Pcg32> {
    state: GameState,
    /// Last persisted best score
    best: BestScore,
    store: S,
    stage: P,
    rng: R,
    idle_mode: bool,
}

impl<S: KeyValueStore> Game<S> {
    /// Headless game with a seeded RNG
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Self {
        Self::with_parts(tuning, store, NullStage, Pcg32::seed_from_u64(seed))
    }
}

impl<S: KeyValueStore, P: Stage, R: RandomSource> Game<S, P, R> {
    pub fn with_parts(tuning: Tuning, store: S, stage: P, rng: R) -> Self {
        let best = BestScore::load(&store);
        let mut game = Self {
            state: GameState::new(tuning, best.0),
            best,
            store,
            stage,
            rng,
            idle_mode: false,
        };
        let hud = Hud::from_state(&game.state);
        game.stage.show_hud(&hud);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn best_score(&self) -> u32 {
        self.best.0
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn stage(&self) -> &P {
        &self.stage
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    /// Let the autopilot play
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
    }

    /// Primary action: start, jump or leave the game-over screen
    pub fn primary_action(&mut self) {
        sim::primary_action(&mut self.state);
        self.flush();
    }

    pub fn toggle_pause(&mut self) {
        sim::toggle_pause(&mut self.state);
        self.flush();
    }

    /// Apply a host input event immediately
    pub fn handle_input(&mut self, event: &InputEvent) {
        let input = tick_input_for(event, self.state.phase);
        if input.primary {
            sim::primary_action(&mut self.state);
        }
        if input.pause {
            sim::toggle_pause(&mut self.state);
        }
        self.flush();
    }

    /// Advance one frame; `delta` is the frame-time scale (1.0 at the reference rate)
    pub fn update(&mut self, delta: f32) {
        let input = TickInput {
            idle_mode: self.idle_mode,
            ..Default::default()
        };
        sim::tick(&mut self.state, &input, delta, &mut self.rng);
        self.flush();
    }

    /// Advance one reference frame
    pub fn step(&mut self) {
        self.update(1.0);
    }

    /// Forward pending events to the stage and the store
    fn flush(&mut self) {
        let events = self.state.drain_events();
        let mut hud_dirty = false;

        for event in &events {
            match *event {
                GameEvent::PhaseChanged { .. } | GameEvent::ObstacleCleared { .. } => hud_dirty = true,
                GameEvent::ObstacleSpawned(id) => {
                    if let Some(obstacle) = self.state.obstacles.iter().find(|o| o.id == id) {
                        self.stage.add_obstacle(obstacle);
                    }
                }
                GameEvent::EffectSpawned(id) => {
                    if let Some(effect) = self.state.effects.iter().find(|e| e.id == id) {
                        self.stage.add_effect(effect);
                    }
                }
                GameEvent::ObstacleRemoved(id) | GameEvent::EffectExpired(id) => {
                    self.stage.remove_entity(id);
                }
                GameEvent::NewBest(score) => {
                    self.best.record(score, &mut self.store);
                    hud_dirty = true;
                }
                GameEvent::Jumped { .. } | GameEvent::Collided(_) => {}
            }
        }

        if self.state.phase == GamePhase::Playing || !events.is_empty() {
            self.stage
                .sync_entities(&self.state.player, &self.state.obstacles, &self.state.effects);
            self.stage.scroll_floor(self.state.floor_offset);
        }
        if hud_dirty {
            let hud = Hud::from_state(&self.state);
            self.stage.show_hud(&hud);
        }
    }
}
