//! Card system: symbols and card instances.
//!
//! ## Two-Layer Design
//!
//! - **SymbolId / SymbolPool**: What a card shows; pairs share a symbol
//! - **Card**: A tile on the board with flip and match state
//!
//! Boards draw pairs from a `SymbolPool` and lay out `Card`s row-major.

pub mod symbol;
pub mod card;

pub use symbol::{SymbolId, SymbolPool, IMAGE_SYMBOL_COUNT};
pub use card::{Card, Position};
