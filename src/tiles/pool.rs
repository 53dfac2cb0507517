//! Tile pool - the bag of physical tiles.
//!
//! `TilePool` owns every `TileInstance` of a game and tracks which ones are
//! still in the bag. A tile leaves the bag when drawn and counts as played
//! from then on, whether it sits in a hand or on the board.
//!
//! ## Index lists
//!
//! The played and unplayed id lists are rebuilt from the status array after
//! every mutation, so they are always consistent with it and always sorted.

use serde::{Deserialize, Serialize};

use super::catalog::TileCatalog;
use super::definition::{self, DefinitionId, TileId, TILE_EXITS};
use crate::core::error::{PoolError, TileError};
use crate::core::rng::GameRng;

/// Whether a tile is still in the bag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileStatus {
    #[default]
    Unplayed,
    Played,
}

/// A physical tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInstance {
    pub id: TileId,
    /// Variant this tile was cut from.
    pub definition: DefinitionId,
    pub exits: [u8; TILE_EXITS],
    pub strip_offset: u8,
    pub status: TileStatus,
}

impl TileInstance {
    /// Where the track entering at `entry` leaves the tile.
    pub fn find_exit(&self, entry: u8) -> Result<u8, TileError> {
        definition::find_exit(&self.exits, entry)
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.status == TileStatus::Played
    }
}

/// The game's tile bag.
///
/// ## Example
///
/// ```
/// use track_insanity::core::GameRng;
/// use track_insanity::tiles::TilePool;
///
/// let mut pool = TilePool::standard();
/// let mut rng = GameRng::new(7);
///
/// let tile = pool.draw_random_tile(&mut rng).unwrap();
/// assert_eq!(pool.num_played_tiles(), 1);
/// assert_eq!(pool.num_unplayed_tiles(), 59);
///
/// pool.return_tile_to_pool(tile).unwrap();
/// assert_eq!(pool.num_unplayed_tiles(), 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vec<TileInstance>,
    played: Vec<TileId>,
    unplayed: Vec<TileId>,
}

impl Default for TilePool {
    fn default() -> Self {
        Self::standard()
    }
}

impl TilePool {
    /// Pool of the 60 standard tiles, all unplayed.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_catalog(&TileCatalog::standard())
    }

    /// Cut `copies` instances of every definition, in definition order.
    #[must_use]
    pub fn from_catalog(catalog: &TileCatalog) -> Self {
        let tiles = catalog
            .in_order()
            .into_iter()
            .flat_map(|def| std::iter::repeat(def).take(def.copies as usize))
            .enumerate()
            .map(|(index, def)| TileInstance {
                id: TileId::new(index as u8),
                definition: def.id,
                exits: def.exits,
                strip_offset: def.strip_offset,
                status: TileStatus::Unplayed,
            })
            .collect();

        let mut pool = Self {
            tiles,
            played: Vec::new(),
            unplayed: Vec::new(),
        };
        pool.rebuild_index();
        pool
    }

    /// Put every tile back in the bag.
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            tile.status = TileStatus::Unplayed;
        }
        self.rebuild_index();
    }

    /// Total number of tiles, played or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get_tile(&self, id: TileId) -> Result<&TileInstance, TileError> {
        self.tiles
            .get(id.index())
            .ok_or(TileError::OutOfRange(id.index()))
    }

    /// Where the track entering tile `id` at `entry` leaves it.
    pub fn find_exit(&self, id: TileId, entry: u8) -> Result<u8, TileError> {
        self.get_tile(id)?.find_exit(entry)
    }

    /// Art strip offset of a tile.
    pub fn strip_offset(&self, id: TileId) -> Result<u8, TileError> {
        Ok(self.get_tile(id)?.strip_offset)
    }

    /// Draw a uniformly random unplayed tile and mark it played.
    pub fn draw_random_tile(&mut self, rng: &mut GameRng) -> Result<TileId, PoolError> {
        if self.unplayed.is_empty() {
            return Err(PoolError::Empty);
        }
        let pick = rng.gen_range_usize(0..self.unplayed.len());
        let id = self.unplayed[pick];
        self.set_status(id, TileStatus::Played);
        Ok(id)
    }

    /// Take a specific tile out of the bag.
    pub fn draw_tile(&mut self, id: TileId) -> Result<TileId, PoolError> {
        if self.get_tile(id)?.is_played() {
            return Err(PoolError::AlreadyPlayed(id));
        }
        self.set_status(id, TileStatus::Played);
        Ok(id)
    }

    /// Put a played tile back in the bag.
    pub fn return_tile_to_pool(&mut self, id: TileId) -> Result<(), PoolError> {
        if self.played.is_empty() {
            return Err(PoolError::NothingPlayed);
        }
        if !self.get_tile(id)?.is_played() {
            return Err(PoolError::AlreadyUnplayed(id));
        }
        self.set_status(id, TileStatus::Unplayed);
        Ok(())
    }

    #[must_use]
    pub fn num_played_tiles(&self) -> usize {
        self.played.len()
    }

    #[must_use]
    pub fn num_unplayed_tiles(&self) -> usize {
        self.unplayed.len()
    }

    #[must_use]
    pub fn played_tiles(&self) -> &[TileId] {
        &self.played
    }

    #[must_use]
    pub fn unplayed_tiles(&self) -> &[TileId] {
        &self.unplayed
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileInstance> {
        self.tiles.iter()
    }

    fn set_status(&mut self, id: TileId, status: TileStatus) {
        if let Some(tile) = self.tiles.get_mut(id.index()) {
            tile.status = status;
        }
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.played.clear();
        self.unplayed.clear();
        for tile in &self.tiles {
            match tile.status {
                TileStatus::Played => self.played.push(tile.id),
                TileStatus::Unplayed => self.unplayed.push(tile.id),
            }
        }
    }
}
