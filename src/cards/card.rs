//! Card instances - runtime card state.
//!
//! A `Card` is one tile on the board. It knows its symbol, where it sits, and
//! whether it is face-up and/or matched. Flip and match are independent flags:
//! a matched card is always shown face-up, but a face-up card is not
//! necessarily matched.

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Grid coordinate, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Pair identifier.
    pub symbol: SymbolId,

    /// Grid coordinate.
    pub position: Position,

    /// Face-up?
    pub is_flipped: bool,

    /// Part of a resolved pair?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(symbol: SymbolId, position: Position) -> Self {
        Self {
            symbol,
            position,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Toggle the face-up state.
    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    /// Whether a player may reveal this card.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// The symbol, if it is currently visible.
    #[must_use]
    pub fn visible_symbol(&self) -> Option<&SymbolId> {
        (self.is_flipped || self.is_matched).then_some(&self.symbol)
    }
}
