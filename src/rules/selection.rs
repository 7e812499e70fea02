//! Cards revealed during the current turn.

use smallvec::SmallVec;

use crate::cards::Position;

/// Up to two face-up, unresolved cards, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    picks: SmallVec<[Position; 2]>,
}

impl SelectionBuffer {
    /// Maximum number of buffered picks.
    pub const CAPACITY: usize = 2;

    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a pick. Returns false (and changes nothing) when already full.
    pub fn push(&mut self, position: Position) -> bool {
        if self.is_full() {
            return false;
        }
        self.picks.push(position);
        true
    }

    /// Number of buffered picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if no card is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Check if both picks are in.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() == Self::CAPACITY
    }

    /// Both picks, once the buffer is full.
    #[must_use]
    pub fn pair(&self) -> Option<(Position, Position)> {
        match self.picks.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Buffered picks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.picks
    }

    /// Drop all picks.
    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
