//! The persisted game snapshot.
//!
//! Field order here is the wire order, so do not reorder fields without
//! bumping `codec::FORMAT_VERSION`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::SymbolId;
use crate::core::PlayerId;
use crate::error::{PersistResult, PersistenceError};

/// Board dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub width: u32,
    pub height: u32,
}

/// One player's score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub score: u32,
}

/// Both players plus whose turn it is (1 or 2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersState {
    pub player1: PlayerState,
    pub player2: PlayerState,
    pub current_player: u8,
}

/// Parallel arrays indexed by flat board index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsState {
    pub all_cards: Vec<SymbolId>,
    pub matched_cards: Vec<bool>,
}

/// Everything needed to resume a game.
///
/// Only matched/unmatched is recorded. Cards that were face-up but unresolved
/// at save time come back face-down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: BoardState,
    pub players: PlayersState,
    pub cards: CardsState,
}

impl GameState {
    /// The player to move, if the stored number is valid.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        PlayerId::from_number(self.players.current_player)
    }

    /// Score for a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        if player == PlayerId::ONE {
            self.players.player1.score
        } else {
            self.players.player2.score
        }
    }

    /// Check the structural rules a decoded snapshot must satisfy.
    ///
    /// - card arrays are parallel and cover the board
    /// - the current player is 1 or 2
    /// - every symbol appears exactly twice, and both copies agree on matched
    /// - the scores add up to the number of matched pairs
    pub fn validate(&self) -> PersistResult<()> {
        let cards = &self.cards;
        if cards.all_cards.len() != cards.matched_cards.len() {
            return Err(malformed(format!(
                "{} cards but {} matched flags",
                cards.all_cards.len(),
                cards.matched_cards.len()
            )));
        }

        let expected = u64::from(self.board.width) * u64::from(self.board.height);
        if cards.all_cards.len() as u64 != expected {
            return Err(malformed(format!(
                "{}x{} board but {} cards",
                self.board.width,
                self.board.height,
                cards.all_cards.len()
            )));
        }

        if self.current_player().is_none() {
            return Err(malformed(format!(
                "current player {} is not 1 or 2",
                self.players.current_player
            )));
        }

        let mut pairs: FxHashMap<&SymbolId, (usize, usize)> = FxHashMap::default();
        for (symbol, &matched) in cards.all_cards.iter().zip(&cards.matched_cards) {
            let entry = pairs.entry(symbol).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += usize::from(matched);
        }
        for (symbol, (count, matched)) in &pairs {
            if *count != 2 {
                return Err(malformed(format!("symbol {symbol} appears {count} times")));
            }
            if *matched == 1 {
                return Err(malformed(format!("symbol {symbol} is half matched")));
            }
        }

        let matched_pairs = cards.matched_cards.iter().filter(|&&m| m).count() / 2;
        let total = u64::from(self.players.player1.score) + u64::from(self.players.player2.score);
        if total != matched_pairs as u64 {
            return Err(malformed(format!(
                "scores total {total} but {matched_pairs} pairs are matched"
            )));
        }

        Ok(())
    }
}

fn malformed(reason: String) -> PersistenceError {
    PersistenceError::MalformedData(reason)
}
