use crate::constants::*;
use crate::error::{DungeonError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs for one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest leaf dimension a split may produce
    pub min_leaf_size: i32,
    /// Leaves above this on either axis always attempt a split
    pub max_leaf_size: i32,
    /// Smallest room width/height
    pub min_room_size: i32,
    /// Chance that a leaf within the size limit splits anyway
    pub split_probability: f64,
    /// Fixed seed for reproducible output; `None` seeds from the thread RNG
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_leaf_size: DUNGEON_MIN_LEAF_SIZE,
            max_leaf_size: DUNGEON_MAX_LEAF_SIZE,
            min_room_size: DUNGEON_MIN_ROOM_SIZE,
            split_probability: DUNGEON_SPLIT_PROBABILITY,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = std::fs::read_to_string(path)?;
        Self::from_json_str(&json_str)
    }

    /// Smallest leaf side that can still hold a room with its margin
    pub fn min_region_size(&self) -> i32 {
        self.min_room_size + DUNGEON_ROOM_MARGIN * 2
    }

    /// Check that every sampling range the generator will use is non-empty
    /// for a map of the given size.
    pub fn validate(&self, map_width: i32, map_height: i32) -> Result<()> {
        let invalid = |msg: String| Err(DungeonError::InvalidConfiguration(msg));

        if self.min_leaf_size <= 0 || self.max_leaf_size <= 0 || self.min_room_size <= 0 {
            return invalid(format!(
                "sizes must be positive (min_leaf={}, max_leaf={}, min_room={})",
                self.min_leaf_size, self.max_leaf_size, self.min_room_size
            ));
        }
        if self.max_leaf_size < self.min_leaf_size {
            return invalid(format!(
                "max_leaf_size {} is below min_leaf_size {}",
                self.max_leaf_size, self.min_leaf_size
            ));
        }
        if self.min_room_size < DUNGEON_MIN_CONNECTABLE_ROOM {
            return invalid(format!(
                "min_room_size {} leaves no interior tile; need at least {}",
                self.min_room_size, DUNGEON_MIN_CONNECTABLE_ROOM
            ));
        }
        if self.min_region_size() > self.min_leaf_size {
            return invalid(format!(
                "min_room_size {} plus margins does not fit in min_leaf_size {}",
                self.min_room_size, self.min_leaf_size
            ));
        }
        if !(0.0..=1.0).contains(&self.split_probability) {
            return invalid(format!(
                "split_probability {} is outside [0, 1]",
                self.split_probability
            ));
        }

        // A side below min_leaf_size would be inherited by every split child
        let sides = self.min_leaf_size..=DUNGEON_MAX_MAP_SIZE;
        if !sides.contains(&map_width) || !sides.contains(&map_height) {
            return Err(DungeonError::InvalidMapSize {
                width: map_width,
                height: map_height,
                min: *sides.start(),
                max: *sides.end(),
            });
        }

        Ok(())
    }
}
