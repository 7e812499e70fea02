//! Read-only projection of the game for presentation.
//!
//! Face-down cards are opaque: a `BoardView` never leaks the symbol of a card
//! that is not currently visible.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::cards::{Card, Position, SymbolId};
use crate::core::{PlayerId, PlayerMap};
use crate::rules::Phase;

/// What a single cell shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    /// Face-down.
    Hidden,
    /// Face-up, waiting for its turn to resolve.
    FaceUp(SymbolId),
    /// Part of a resolved pair.
    Matched(SymbolId),
}

impl CellView {
    fn of(card: &Card) -> Self {
        match card.visible_symbol() {
            None => CellView::Hidden,
            Some(symbol) if card.is_matched => CellView::Matched(symbol.clone()),
            Some(symbol) => CellView::FaceUp(symbol.clone()),
        }
    }

    /// The visible symbol, if any.
    #[must_use]
    pub fn symbol(&self) -> Option<&SymbolId> {
        match self {
            CellView::Hidden => None,
            CellView::FaceUp(s) | CellView::Matched(s) => Some(s),
        }
    }
}

/// Snapshot of everything a presentation layer needs to redraw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub width: u32,
    pub height: u32,
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    pub scores: PlayerMap<u32>,
    pub current_player: PlayerId,
    pub phase: Phase,
}

impl BoardView {
    pub(crate) fn new(
        board: &Board,
        scores: &PlayerMap<u32>,
        current_player: PlayerId,
        phase: Phase,
    ) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            cells: board.cards().iter().map(CellView::of).collect(),
            scores: scores.clone(),
            current_player,
            phase,
        }
    }

    /// The cell at a position, or `None` if off the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&CellView> {
        if position.row >= self.height || position.col >= self.width {
            return None;
        }
        self.cells
            .get(position.row as usize * self.width as usize + position.col as usize)
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}
