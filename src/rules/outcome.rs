//! Results handed back to the presentation layer after each intent.

use serde::{Deserialize, Serialize};

use crate::cards::{Position, SymbolId};
use crate::core::PlayerId;
use super::phase::Phase;

/// How a pair of picks resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Same symbol: both cards stay up and the player scores.
    Match {
        player: PlayerId,
        positions: [Position; 2],
        /// The player's score after the point was awarded.
        score: u32,
    },
    /// Different symbols: both cards wait for acknowledgment.
    Mismatch { positions: [Position; 2] },
}

/// What changed after a successful `select`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    /// The card that was turned face-up.
    pub revealed: Position,
    /// Its symbol.
    pub symbol: SymbolId,
    /// Phase after the intent, including any automatic resolution.
    pub phase: Phase,
    /// Set when this pick completed a pair.
    pub resolution: Option<Resolution>,
}

impl TransitionOutcome {
    /// The player who scored and by how much.
    #[must_use]
    pub fn score_delta(&self) -> Option<(PlayerId, u32)> {
        match self.resolution {
            Some(Resolution::Match { player, .. }) => Some((player, 1)),
            _ => None,
        }
    }

    /// Did this pick finish the game?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Did this pick complete a matching pair?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self.resolution, Some(Resolution::Match { .. }))
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_delta() {
        let outcome = TransitionOutcome {
            revealed: Position::new(0, 1),
            symbol: "A".into(),
            phase: Phase::AwaitingFirstPick,
            resolution: Some(Resolution::Match {
                player: PlayerId::TWO,
                positions: [Position::new(0, 0), Position::new(0, 1)],
                score: 3,
            }),
        };
        assert_eq!(outcome.score_delta(), Some((PlayerId::TWO, 1)));
        assert!(outcome.is_match());
        assert!(!outcome.is_game_over());
    }

    #[test]
    fn test_first_pick_has_no_delta() {
        let outcome = TransitionOutcome {
            revealed: Position::new(0, 0),
            symbol: "A".into(),
            phase: Phase::AwaitingSecondPick,
            resolution: None,
        };
        assert_eq!(outcome.score_delta(), None);
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::TWO);
        assert!(!result.is_winner(PlayerId::ONE));
        assert!(result.is_winner(PlayerId::TWO));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::ONE));
        assert!(!draw.is_winner(PlayerId::TWO));
    }
}
