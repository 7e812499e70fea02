//! Core types: players, RNG, configuration.
//!
//! These are shared by the board, the rules engine and persistence.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{MemoryConfig, DEFAULT_MAX_DIMENSION, DEFAULT_MIN_DIMENSION};
