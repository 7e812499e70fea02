//! Gameplay rules: the turn state machine and its outcomes.
//!
//! - `Phase`: where the current turn stands
//! - `SelectionBuffer`: the picks of the current turn
//! - `Engine`: applies intents, resolves pairs, detects game over
//! - `TransitionOutcome`: what a `select` changed, for redraws

pub mod phase;
pub mod selection;
pub mod outcome;
pub mod engine;

pub use phase::Phase;
pub use selection::SelectionBuffer;
pub use outcome::{GameResult, Resolution, TransitionOutcome};
pub use engine::{Engine, EngineBuilder};
