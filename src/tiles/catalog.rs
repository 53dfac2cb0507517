//! Tile catalog for definition lookup.
//!
//! The `TileCatalog` stores every tile variant of the game. The standard
//! catalog has 24 variants cut into 60 physical tiles.

use rustc_hash::FxHashMap;

use super::definition::{DefinitionId, TileDefinition, TILE_EXITS};

/// Standard tile set: (exits, copies), in art-strip order.
const STANDARD_TILES: [([u8; TILE_EXITS], u8); 24] = [
    ([1, 0, 3, 2, 5, 4, 7, 6], 2),
    ([5, 4, 7, 6, 1, 0, 3, 2], 4),
    ([1, 0, 7, 6, 5, 4, 3, 2], 2),
    ([7, 2, 1, 4, 3, 6, 5, 0], 2),
    ([7, 2, 1, 6, 5, 4, 3, 0], 2),
    ([7, 4, 3, 2, 1, 6, 5, 0], 2),
    ([5, 4, 3, 2, 1, 0, 7, 6], 2),
    ([5, 2, 1, 4, 3, 0, 7, 6], 2),
    ([1, 0, 7, 4, 3, 6, 5, 2], 2),
    ([7, 6, 5, 4, 3, 2, 1, 0], 3),
    ([3, 2, 1, 0, 5, 4, 7, 6], 2),
    ([1, 0, 5, 4, 3, 2, 7, 6], 2),
    ([7, 6, 3, 2, 5, 4, 1, 0], 2),
    ([1, 0, 3, 2, 7, 6, 5, 4], 2),
    ([3, 6, 5, 0, 7, 2, 1, 4], 2),
    ([3, 6, 7, 0, 5, 4, 1, 2], 2),
    ([1, 0, 5, 6, 7, 2, 3, 4], 2),
    ([5, 2, 1, 6, 7, 0, 3, 4], 4),
    ([3, 4, 7, 0, 1, 6, 5, 2], 4),
    ([7, 4, 5, 6, 1, 2, 3, 0], 4),
    ([3, 4, 5, 0, 1, 2, 7, 6], 2),
    ([5, 6, 7, 4, 3, 0, 1, 2], 4),
    ([3, 2, 1, 0, 7, 6, 5, 4], 3),
    ([5, 6, 3, 2, 7, 0, 1, 4], 2),
];

/// Catalog of tile definitions.
///
/// ## Example
///
/// ```
/// use track_insanity::tiles::{DefinitionId, TileCatalog};
///
/// let catalog = TileCatalog::standard();
/// assert_eq!(catalog.len(), 24);
/// assert_eq!(catalog.total_copies(), 60);
///
/// let straight = catalog.get(DefinitionId::new(2)).unwrap();
/// assert_eq!(straight.copies, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileCatalog {
    tiles: FxHashMap<DefinitionId, TileDefinition>,
}

impl TileCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 24 variants of the published game.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (index, (exits, copies)) in STANDARD_TILES.iter().enumerate() {
            let number = index as u8 + 1;
            catalog.register(
                TileDefinition::new(DefinitionId::new(number), *exits, number)
                    .with_copies(*copies),
            );
        }
        catalog
    }

    /// Register a definition, replacing any previous one with the same id.
    pub fn register(&mut self, tile: TileDefinition) {
        self.tiles.insert(tile.id, tile);
    }

    #[must_use]
    pub fn get(&self, id: DefinitionId) -> Option<&TileDefinition> {
        self.tiles.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: DefinitionId) -> bool {
        self.tiles.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of physical tiles across all definitions.
    #[must_use]
    pub fn total_copies(&self) -> usize {
        self.tiles.values().map(|t| t.copies as usize).sum()
    }

    /// Definitions in ascending id order.
    #[must_use]
    pub fn in_order(&self) -> Vec<&TileDefinition> {
        let mut tiles: Vec<_> = self.tiles.values().collect();
        tiles.sort_by_key(|t| t.id);
        tiles
    }
}
