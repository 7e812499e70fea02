//! # memory-match
//!
//! A two-player memory matching game engine with encrypted save/resume.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns Truth**: Board, scores and turn live in `Engine`.
//!    Presentation layers only forward intents and redraw from `snapshot()`.
//!
//! 2. **Pure Transitions**: Every intent is a method returning a `Result`.
//!    Rejected intents leave the game untouched.
//!
//! 3. **Explicit Persistence**: Saves go to an explicit `SavePaths` pair;
//!    nothing depends on the working directory.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `cards`: Symbols and card instances
//! - `board`: The card grid and its read-only view
//! - `rules`: Turn state machine and outcomes
//! - `persist`: Snapshot, binary codec, encryption, save files
//! - `error`: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use memory_match::{EngineBuilder, Phase, PlayerId, SymbolPool};
//!
//! let mut engine = EngineBuilder::new()
//!     .symbol_pool(SymbolPool::new(["A", "B"]))
//!     .seed(7)
//!     .build(2, 2)
//!     .unwrap();
//!
//! let first = engine.board().cards()[0].clone();
//! let twin = engine
//!     .board()
//!     .cards()
//!     .iter()
//!     .skip(1)
//!     .find(|c| c.symbol == first.symbol)
//!     .unwrap()
//!     .position;
//!
//! engine.select(first.position).unwrap();
//! let outcome = engine.select(twin).unwrap();
//!
//! assert_eq!(outcome.score_delta(), Some((PlayerId::ONE, 1)));
//! assert_eq!(engine.phase(), Phase::AwaitingFirstPick);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod persist;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, MemoryConfig, PlayerId, PlayerMap};

pub use crate::cards::{Card, Position, SymbolId, SymbolPool};

pub use crate::board::{Board, BoardView, CellView};

pub use crate::rules::{
    Engine, EngineBuilder, GameResult, Phase, Resolution, SelectionBuffer, TransitionOutcome,
};

pub use crate::persist::{GameState, Key, SavePaths};

pub use crate::error::{ConstructionError, InvalidAction, PersistenceError};
