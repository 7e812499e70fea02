//! The card grid.
//!
//! ## Layout
//!
//! Cards are stored row-major: the card at `(row, col)` lives at flat index
//! `row * width + col`. Persistence uses the same flat order, so symbol and
//! matched-flag arrays line up with `cards()` one-to-one.
//!
//! The board holds card state only. It never decides whether a flip is
//! allowed; that is the rules engine's job.

use log::debug;

use crate::cards::{Card, Position, SymbolId, SymbolPool};
use crate::core::GameRng;
use crate::error::{ActionResult, BuildResult, ConstructionError, InvalidAction};

/// Fewest cards a board may hold (two pairs).
pub const MIN_CARDS: u64 = 4;

/// A rectangular grid of cards where every symbol appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh board.
    ///
    /// Draws `width * height / 2` distinct symbols from `pool`, doubles them,
    /// shuffles and lays them out row-major. All cards start face-down.
    pub fn new(
        width: u32,
        height: u32,
        pool: &SymbolPool,
        rng: &mut GameRng,
    ) -> BuildResult<Self> {
        let count = Self::card_count(width, height)?;
        let pairs = count / 2;

        if pool.len() < pairs {
            return Err(ConstructionError::InsufficientSymbols {
                required: pairs,
                available: pool.len(),
            });
        }

        let mut symbols = rng.sample(pool.symbols(), pairs);
        symbols.extend_from_within(..);
        rng.shuffle(&mut symbols);

        debug!("Dealt {}x{} board ({} pairs) with seed {}", width, height, pairs, rng.seed());

        let cards = Self::layout(width, symbols);
        Ok(Self {
            width,
            height,
            cards,
        })
    }

    /// Rebuild a board from persisted symbols and matched flags.
    ///
    /// Matched cards come back face-up; everything else comes back
    /// face-down, since flip state is never persisted.
    pub fn restore(
        width: u32,
        height: u32,
        symbols: Vec<SymbolId>,
        matched_flags: Vec<bool>,
    ) -> BuildResult<Self> {
        let count = Self::card_count(width, height)?;

        if symbols.len() != count || matched_flags.len() != count {
            return Err(ConstructionError::DimensionMismatch {
                expected: count,
                symbols: symbols.len(),
                flags: matched_flags.len(),
            });
        }

        let mut cards = Self::layout(width, symbols);
        for (card, matched) in cards.iter_mut().zip(matched_flags) {
            card.is_matched = matched;
            card.is_flipped = matched;
        }

        Ok(Self {
            width,
            height,
            cards,
        })
    }

    /// Validate dimensions and return the card count.
    fn card_count(width: u32, height: u32) -> BuildResult<usize> {
        let count = u64::from(width) * u64::from(height);
        if count < MIN_CARDS || count % 2 != 0 {
            return Err(ConstructionError::InvalidDimensions { width, height });
        }
        usize::try_from(count).map_err(|_| ConstructionError::InvalidDimensions { width, height })
    }

    fn layout(width: u32, symbols: Vec<SymbolId>) -> Vec<Card> {
        let width = width as usize;
        symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| {
                let position = Position::new((i / width) as u32, (i % width) as u32);
                Card::new(symbol, position)
            })
            .collect()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Flat index for a position, or `None` if it is off the grid.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if position.row >= self.height || position.col >= self.width {
            return None;
        }
        Some(position.row as usize * self.width as usize + position.col as usize)
    }

    /// Get the card at a position.
    pub fn card_at(&self, position: Position) -> ActionResult<&Card> {
        self.index_of(position)
            .map(|i| &self.cards[i])
            .ok_or(InvalidAction::OutOfBounds(position))
    }

    fn card_at_mut(&mut self, position: Position) -> ActionResult<&mut Card> {
        match self.index_of(position) {
            Some(i) => Ok(&mut self.cards[i]),
            None => Err(InvalidAction::OutOfBounds(position)),
        }
    }

    /// Toggle a card face-up/face-down.
    ///
    /// This is a raw toggle: it will happily flip a matched card. Callers
    /// enforce the gameplay guards.
    pub fn flip(&mut self, position: Position) -> ActionResult<()> {
        self.card_at_mut(position)?.flip();
        Ok(())
    }

    /// Mark a card as part of a resolved pair. Matched cards stay face-up.
    pub fn mark_matched(&mut self, position: Position) -> ActionResult<()> {
        let card = self.card_at_mut(position)?;
        card.is_matched = true;
        card.is_flipped = true;
        Ok(())
    }

    /// True once every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    /// Number of resolved pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Symbols in flat order (for snapshots).
    #[must_use]
    pub fn symbols(&self) -> Vec<SymbolId> {
        self.cards.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Matched flags in flat order (for snapshots).
    #[must_use]
    pub fn matched_flags(&self) -> Vec<bool> {
        self.cards.iter().map(|c| c.is_matched).collect()
    }
}
