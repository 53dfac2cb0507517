//! Tiles: the catalog of tile variants and the pool of physical tiles.
//!
//! - `TileDefinition`: immutable wiring of one variant
//! - `TileCatalog`: lookup of all variants
//! - `TilePool`: the 60 physical tiles and their played/unplayed status

pub mod catalog;
pub mod definition;
pub mod pool;

pub use catalog::TileCatalog;
pub use definition::{find_exit, DefinitionId, TileDefinition, TileId, TILE_EXITS};
pub use pool::{TileInstance, TilePool, TileStatus};
