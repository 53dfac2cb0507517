//! Tile definitions - static wiring data.
//!
//! A `TileDefinition` describes one tile variant: how its eight perimeter
//! connection points are joined by track, and where its picture sits in the
//! art strip. Positions are numbered clockwise from the top-left:
//!
//! ```text
//! +--|--|--+
//! |  0  1  |
//! -7      2-
//! |        |
//! -6      3-
//! |  5  4  |
//! +--|--|--+
//! ```
//!
//! Every definition is a perfect pairing: `exits[exits[i]] == i` and no
//! position is joined to itself.
//!
//! The pool holds several physical copies of each definition; copies are
//! `TileInstance`s identified by `TileId`.

use serde::{Deserialize, Serialize};

use crate::core::error::TileError;

/// Number of connection points on a tile.
pub const TILE_EXITS: usize = 8;

/// Identifier of a physical tile in the pool (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into the pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Identifier of a tile variant (1-based, matching the art strip).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefinitionId(pub u8);

impl DefinitionId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Static tile definition.
///
/// ## Example
///
/// ```
/// use track_insanity::tiles::{DefinitionId, TileDefinition};
///
/// // The "U" tile: every point loops back to its neighbour.
/// let u_tile = TileDefinition::new(DefinitionId::new(1), [1, 0, 3, 2, 5, 4, 7, 6], 1)
///     .with_copies(2);
///
/// assert_eq!(u_tile.find_exit(2), Ok(3));
/// assert!(u_tile.is_valid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDefinition {
    pub id: DefinitionId,

    /// `exits[entry]` is the position the track leaves by.
    pub exits: [u8; TILE_EXITS],

    /// Position of the tile picture in the art strip.
    pub strip_offset: u8,

    /// Copies of this tile in a standard pool.
    pub copies: u8,
}

impl TileDefinition {
    /// Create a definition with a single copy.
    #[must_use]
    pub fn new(id: DefinitionId, exits: [u8; TILE_EXITS], strip_offset: u8) -> Self {
        Self {
            id,
            exits,
            strip_offset,
            copies: 1,
        }
    }

    #[must_use]
    pub fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Where the track entering at `entry` leaves the tile.
    pub fn find_exit(&self, entry: u8) -> Result<u8, TileError> {
        find_exit(&self.exits, entry)
    }

    /// Check the pairing invariant.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.exits.iter().enumerate().all(|(entry, &exit)| {
            (exit as usize) < TILE_EXITS
                && exit as usize != entry
                && self.exits[exit as usize] as usize == entry
        })
    }
}

/// Look up an exit in a raw exit table.
pub fn find_exit(exits: &[u8; TILE_EXITS], entry: u8) -> Result<u8, TileError> {
    exits
        .get(entry as usize)
        .copied()
        .ok_or(TileError::InvalidExit(entry))
}
