//! Engine settings
//!
//! Persisted as JSON next to the high score. Missing fields take defaults so
//! older files keep loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FOUR_PROBABILITY;
use crate::error::StoreError;

/// When a swipe is followed by a new tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn after every processed swipe, even one that changed nothing
    #[default]
    Always,
    /// Spawn only when the swipe moved or merged at least one tile
    OnChange,
}

impl SpawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Always => "always",
            SpawnPolicy::OnChange => "on_change",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "always" => Some(SpawnPolicy::Always),
            "on_change" | "on-change" | "onchange" => Some(SpawnPolicy::OnChange),
            _ => None,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
    pub spawn_policy: SpawnPolicy,
    /// Probability that a spawned tile is a 4
    pub four_probability: f64,
    /// Where the native build keeps the high score
    pub high_score_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            spawn_policy: SpawnPolicy::Always,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            high_score_path: None,
        }
    }
}

impl Settings {
    /// Settings with a fixed seed, everything else default
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
