//! Best score persistence
//!
//! Stored as a decimal string under a single key. Anything unreadable counts
//! as "no prior best".

use serde::{Deserialize, Serialize};

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::KeyValueStore;

/// Best score across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BestScore(pub u32);

impl BestScore {
    /// Load from storage, defaulting to 0 when absent or malformed
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(BEST_SCORE_KEY) {
            Some(raw) => Self::parse(&raw).unwrap_or_else(|| {
                log::warn!("Malformed best score {:?}, starting from 0", raw);
                Self(0)
            }),
            None => {
                log::info!("No best score found, starting fresh");
                Self(0)
            }
        }
    }

    /// Parse a stored value; tolerates whitespace and float-formatted integers
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<u32>() {
            return Some(Self(value));
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => {
                Some(Self(value as u32))
            }
            _ => None,
        }
    }

    /// Single write of the current value
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.set(BEST_SCORE_KEY, &self.0.to_string());
        log::info!("Best score saved ({})", self.0);
    }

    /// Record a finished run; saves and returns true only if strictly beaten
    pub fn record<S: KeyValueStore + ?Sized>(&mut self, score: u32, store: &mut S) -> bool {
        if score <= self.0 {
            return false;
        }
        self.0 = score;
        self.save(store);
        true
    }
}
