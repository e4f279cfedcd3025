//! High score tracking
//!
//! The engine never reads or writes this. The front end feeds it the derived
//! score after every update and persists it on shutdown: LocalStorage on the
//! web, a small JSON file natively.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    #[serde(rename = "HighScore")]
    pub best: u64,
}

impl HighScore {
    /// Fixed key the value is stored under
    pub const STORAGE_KEY: &'static str = "HighScore";

    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Record a score; returns true if it set a new best
    pub fn observe(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(StoreError::from)
            .and_then(|json| serde_json::from_str::<HighScore>(&json).map_err(StoreError::from));

        match loaded {
            Ok(score) => {
                log::info!("Loaded high score {}", score.best);
                score
            }
            Err(e) => {
                log::warn!("No high score at {} ({}), starting fresh", path.display(), e);
                Self::new()
            }
        }
    }

    /// Save to a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string(self)?)?;
        log::info!("High score {} saved", self.best);
        Ok(())
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = raw.parse::<u64>() {
                    log::info!("Loaded high score {}", best);
                    return Self { best };
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)?;

        storage
            .set_item(Self::STORAGE_KEY, &self.best.to_string())
            .map_err(|_| StoreError::Unavailable)?;
        log::info!("High score {} saved", self.best);
        Ok(())
    }
}
