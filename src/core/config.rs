//! Game configuration.
//!
//! `MemoryConfig` bounds the board size, optionally fixes the dealing seed and
//! names the save/key file pair. Hosts build it from their own input (the
//! bundled binary maps CLI flags onto it); there is no config file format.

use serde::{Deserialize, Serialize};

use crate::persist::SavePaths;

/// Smallest allowed board dimension.
pub const DEFAULT_MIN_DIMENSION: u32 = 2;

/// Largest allowed board dimension.
pub const DEFAULT_MAX_DIMENSION: u32 = 6;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Minimum width and height of a board.
    pub min_dimension: u32,

    /// Maximum width and height of a board.
    pub max_dimension: u32,

    /// Seed for dealing. `None` draws a fresh seed from the OS per engine.
    pub seed: Option<u64>,

    /// Where saves and the encryption key are written.
    pub save_paths: SavePaths,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
            max_dimension: DEFAULT_MAX_DIMENSION,
            seed: None,
            save_paths: SavePaths::default(),
        }
    }
}

impl MemoryConfig {
    /// Set the dimension bounds (inclusive).
    #[must_use]
    pub fn with_dimension_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_dimension = min;
        self.max_dimension = max;
        self
    }

    /// Fix the dealing seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the save/key file pair.
    #[must_use]
    pub fn with_save_paths(mut self, paths: SavePaths) -> Self {
        self.save_paths = paths;
        self
    }

    /// Check whether a single dimension is within bounds.
    #[must_use]
    pub fn dimension_in_bounds(&self, value: u32) -> bool {
        (self.min_dimension..=self.max_dimension).contains(&value)
    }
}
