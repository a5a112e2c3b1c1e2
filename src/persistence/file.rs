//! JSON file backed store for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;

/// Whole-file JSON object, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store; a missing or corrupt file starts empty
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(entries) => {
                    log::info!("Loaded save data from {}", path.display());
                    entries
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt save file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                log::info!("No save file at {}, starting fresh", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode save data: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sky_hopper_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_roundtrip_through_disk() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::open(&path);
        store.set("sky_hopper_best", "12");

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("sky_hopper_best").as_deref(), Some("12"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("sky_hopper_best"), None);
        let _ = fs::remove_file(&path);
    }
}
