//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two local players. Player numbers are
//! 1-based, matching how they are shown and persisted.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Identifier for one of the two players.
///
/// Only `PlayerId::ONE` and `PlayerId::TWO` exist; use `from_number` to
/// validate untrusted input such as a decoded save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player, who moves first in a new game.
    pub const ONE: Self = Self(1);

    /// The second player.
    pub const TWO: Self = Self(2);

    /// Create a player ID from its 1-based number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 | 2 => Some(Self(number)),
            _ => None,
        }
    }

    /// Get the 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The player whose turn comes next.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(3 - self.0)
    }

    /// Iterate over both player IDs in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| format!("no player numbered {number}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use memory_match::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::TWO] += 1;
///
/// assert_eq!(scores[PlayerId::ONE], 0);
/// assert_eq!(scores[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(PlayerId::TWO.number(), 2);
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.other().other(), PlayerId::ONE);
    }

    #[test]
    fn test_player_id_from_number() {
        assert_eq!(PlayerId::from_number(1), Some(PlayerId::ONE));
        assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
        assert_eq!(PlayerId::from_number(0), None);
        assert_eq!(PlayerId::from_number(3), None);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| u32::from(p.number()) * 10);

        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::default();

        map[PlayerId::ONE] = 3;
        *map.get_mut(PlayerId::TWO) += 4;

        assert_eq!(map[PlayerId::ONE], 3);
        assert_eq!(map[PlayerId::TWO], 4);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| u32::from(p.number()));

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &1), (PlayerId::TWO, &2)]);
    }

    #[test]
    fn test_player_id_serde_rejects_unknown_number() {
        assert_eq!(serde_json::to_string(&PlayerId::TWO).unwrap(), "2");
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::ONE);
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| u32::from(p.number()) + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
