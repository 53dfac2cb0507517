//! Board squares and per-station track status.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::tiles::TileId;

/// What a square on the board is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// Perimeter station, home of at most one train.
    Station,
    /// One of the four hub squares in the middle of the board.
    CentralStation,
    /// Empty square a tile may be placed on.
    #[default]
    Playable,
    /// Cosmetic corner square between station rows.
    Corner,
    /// Square holding a tile.
    PlayedTile,
}

impl SquareKind {
    /// Can a track end here?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SquareKind::Station | SquareKind::CentralStation)
    }
}

/// One square of the board.
///
/// `tile` is set exactly when `kind` is `PlayedTile`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSquare {
    pub kind: SquareKind,
    /// Train waiting at a station.
    pub train: Option<PlayerId>,
    pub tile: Option<TileId>,
}

impl BoardSquare {
    #[must_use]
    pub const fn of_kind(kind: SquareKind) -> Self {
        Self {
            kind,
            train: None,
            tile: None,
        }
    }
}

/// Progress of the track leaving a station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackStatus {
    #[default]
    NotComplete,
    /// Connected to a terminal but not yet scored.
    Complete,
    /// Scored; never scored again.
    Processed,
}
