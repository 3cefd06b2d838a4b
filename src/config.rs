//! # Engine Configuration
//!
//! Plain configuration values handed to the world and the edit session at construction time.
//! Nothing in the core reads files; the binary deserializes an [`EngineConfig`] from JSON and
//! passes it down explicitly.

use serde::{Deserialize, Serialize};

/// Size of every chunk in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkDimensions {
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
}

impl Default for ChunkDimensions {
    fn default() -> Self {
        ChunkDimensions {
            size_x: 16,
            size_y: 16,
            size_z: 16,
        }
    }
}

impl ChunkDimensions {
    pub const fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        ChunkDimensions {
            size_x,
            size_y,
            size_z,
        }
    }
}

/// Top-level engine configuration.
///
/// Every field has a default, so a partial (or empty) JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dimensions of every chunk in the world
    pub chunk: ChunkDimensions,
    /// Chebyshev radius, in chunks, of the loaded window around the player
    pub view_distance: i32,
    /// Unload chunks that leave the window whenever the player changes chunk
    pub unload_outside_view: bool,
    /// Maximum raycast distance for picking the edit target
    pub reach: f32,
    /// Fallback log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            chunk: ChunkDimensions::default(),
            view_distance: 4,
            unload_outside_view: false,
            reach: 100.0,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parses a JSON document, falling back to defaults for missing fields.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<EngineConfig>(json).map(EngineConfig::validated)
    }

    /// Clamps values the world cannot work with: zero chunk sizes become 1, a negative view
    /// distance becomes 0 and a non-finite or negative reach becomes 0.
    pub fn validated(mut self) -> Self {
        self.chunk.size_x = self.chunk.size_x.max(1);
        self.chunk.size_y = self.chunk.size_y.max(1);
        self.chunk.size_z = self.chunk.size_z.max(1);
        self.view_distance = self.view_distance.max(0);
        if !self.reach.is_finite() || self.reach < 0.0 {
            self.reach = 0.0;
        }
        self
    }
}
