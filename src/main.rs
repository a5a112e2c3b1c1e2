//! Sky Hopper entry point
//!
//! The native build runs a headless attract-mode session: the autopilot plays
//! for a fixed number of frames and the best score is kept in a JSON file.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_hopper::persistence::JsonFileStore;
    use sky_hopper::sim::GamePhase;
    use sky_hopper::stage::Stage;
    use sky_hopper::ui::Hud;
    use sky_hopper::{Game, Tuning};

    /// Logs HUD changes instead of drawing them
    struct LogStage {
        runs: u32,
    }

    impl Stage for LogStage {
        fn show_hud(&mut self, hud: &Hud) {
            if hud.title_visible {
                log::debug!("{}", hud.title.replace('\n', " - "));
            }
            if hud.title.starts_with("Game Over") {
                self.runs += 1;
            }
        }
    }

    env_logger::init();
    log::info!("Sky Hopper (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };
    let frames: u64 = env_or("SKY_HOPPER_FRAMES", 3600);
    let seed: u64 = env_or("SKY_HOPPER_SEED", default_seed());
    log::info!("Running {} frames with seed {}", frames, seed);

    let store = JsonFileStore::open("sky_hopper_save.json");
    let stage = LogStage { runs: 0 };
    let rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(seed);
    let mut game = Game::with_parts(tuning, store, stage, rng);
    game.set_idle_mode(true);

    let mut top_score = 0;
    for _ in 0..frames {
        game.step();
        if game.phase() == GamePhase::Playing {
            top_score = top_score.max(game.state().score);
        }
    }

    println!(
        "Played {} frames: {} runs ended, top score this session {}, best {}",
        frames,
        game.stage().runs,
        top_score,
        game.best_score()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> sky_hopper::Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Cannot read tuning file {}: {}, using defaults", path, e);
            return sky_hopper::Tuning::default();
        }
    };
    match sky_hopper::Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning file {}: {}, using defaults", path, e);
            sky_hopper::Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `sky_hopper::Game` directly
}
