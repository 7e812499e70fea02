//! Turn phases of the gameplay state machine.
//!
//! ```text
//! AwaitingFirstPick --select--> AwaitingSecondPick --select--> Resolving
//!        ^                                                      |   |
//!        |<----------------------- match (more pairs left) -----+   |
//!        |                                                          |
//!        |<--acknowledge-- AwaitingNextPlayerAck <---- mismatch ----+
//!
//! Resolving --match (last pair)--> GameOver
//! ```
//!
//! `Resolving` is transient: the engine enters and leaves it within a single
//! `select` call, so callers only observe it if they snapshot mid-call.

use serde::{Deserialize, Serialize};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player's first card.
    #[default]
    AwaitingFirstPick,
    /// One card is face-up; waiting for the second.
    AwaitingSecondPick,
    /// Two cards are face-up and being compared.
    Resolving,
    /// The two cards did not match; both stay visible until acknowledged.
    AwaitingNextPlayerAck,
    /// Every pair is matched.
    GameOver,
}

impl Phase {
    /// Whether `select` is accepted in this phase.
    #[must_use]
    pub fn accepts_selection(self) -> bool {
        matches!(self, Phase::AwaitingFirstPick | Phase::AwaitingSecondPick)
    }

    /// Whether this is the terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Phase::AwaitingFirstPick => "awaiting first pick",
            Phase::AwaitingSecondPick => "awaiting second pick",
            Phase::Resolving => "resolving",
            Phase::AwaitingNextPlayerAck => "awaiting next player",
            Phase::GameOver => "game over",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_selection() {
        assert!(Phase::AwaitingFirstPick.accepts_selection());
        assert!(Phase::AwaitingSecondPick.accepts_selection());
        assert!(!Phase::Resolving.accepts_selection());
        assert!(!Phase::AwaitingNextPlayerAck.accepts_selection());
        assert!(!Phase::GameOver.accepts_selection());
    }

    #[test]
    fn test_terminal() {
        assert!(Phase::GameOver.is_terminal());
        assert!(!Phase::AwaitingNextPlayerAck.is_terminal());
        assert_eq!(Phase::default(), Phase::AwaitingFirstPick);
    }
}
