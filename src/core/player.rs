//! Players: identification, the per-player roster, and held tiles.
//!
//! ## PlayerId
//!
//! Type-safe, 0-based player identifier. The board's ownership table uses
//! 1-based player numbers; `PlayerId::from_number` converts.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Controller kind, AI skill, score, and the (at most two) held tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::action::HeldSlot;
use super::config::SkillLevel;
use crate::tiles::TileId;

/// Most players a single game supports.
pub const MAX_PLAYERS: usize = 6;

/// Fewest players a single game supports.
pub const MIN_PLAYERS: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Convert a 1-based player number (as stored in the station table).
    ///
    /// Returns `None` for 0, which marks an unowned station.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => None,
            n => Some(Self(n - 1)),
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use track_insanity::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use track_insanity::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// scores[PlayerId::new(1)] += 6;
/// assert_eq!(scores[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of slots.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Who controls a roster slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Empty slot in a game with fewer than six players.
    #[default]
    Nobody,
    Human,
    Computer,
}

/// One seat at the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Player {
    pub control: ControlKind,
    pub skill: SkillLevel,
    pub avatar_id: u8,
    pub score: u32,
    pub stations_complete: u32,
    /// The tile in hand.
    pub primary: Option<TileId>,
    /// A second tile drawn while already holding one.
    pub reserve: Option<TileId>,
    /// Where this player last placed a tile (UI highlight only).
    pub last_move: Option<(usize, usize)>,
}

impl Player {
    /// Create a player with an empty hand and no score.
    #[must_use]
    pub fn new(control: ControlKind, skill: SkillLevel) -> Self {
        Self {
            control,
            skill,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.control == ControlKind::Computer
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.control == ControlKind::Human
    }

    /// Tile held in a slot.
    #[must_use]
    pub fn held(&self, slot: HeldSlot) -> Option<TileId> {
        match slot {
            HeldSlot::Primary => self.primary,
            HeldSlot::Reserve => self.reserve,
        }
    }

    /// All held tiles, primary first.
    #[must_use]
    pub fn held_tiles(&self) -> SmallVec<[(HeldSlot, TileId); 2]> {
        let mut held = SmallVec::new();
        if let Some(tile) = self.primary {
            held.push((HeldSlot::Primary, tile));
        }
        if let Some(tile) = self.reserve {
            held.push((HeldSlot::Reserve, tile));
        }
        held
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        usize::from(self.primary.is_some()) + usize::from(self.reserve.is_some())
    }

    /// Put a freshly drawn tile in the first free slot.
    ///
    /// Returns the slot used, or `None` if both slots are full.
    pub fn receive_tile(&mut self, tile: TileId) -> Option<HeldSlot> {
        if self.primary.is_none() {
            self.primary = Some(tile);
            Some(HeldSlot::Primary)
        } else if self.reserve.is_none() {
            self.reserve = Some(tile);
            Some(HeldSlot::Reserve)
        } else {
            None
        }
    }

    /// Take the tile out of a slot.
    ///
    /// Giving up the primary tile promotes the reserve into its place.
    pub fn take_tile(&mut self, slot: HeldSlot) -> Option<TileId> {
        match slot {
            HeldSlot::Primary => {
                let tile = self.primary.take()?;
                self.primary = self.reserve.take();
                Some(tile)
            }
            HeldSlot::Reserve => self.reserve.take(),
        }
    }
}
