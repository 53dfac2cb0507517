//! The 10×10 game board.
//!
//! Squares are indexed `[x][y]` with `(0, 0)` at the top-left. The outer ring
//! holds the 32 stations and the four corners, the 2×2 block at `(4..=5,
//! 4..=5)` holds the central stations, and everything else is playable.
//!
//! ## Legal moves
//!
//! `mark_legal_moves` fills a legality mask for one tile. A square is legal
//! when it is empty and playable, touches the perimeter or an already played
//! tile, and the tile would not immediately send a train back into the
//! station it came from (a one-point track). When nothing is legal and the
//! bag is empty, every empty playable square becomes legal.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::square::{BoardSquare, SquareKind, TrackStatus};
use super::stations::{self, StationId, NUM_STATIONS};
use crate::core::error::BoardError;
use crate::core::player::PlayerId;
use crate::tiles::{TileId, TileInstance};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// The four central station squares.
pub const CENTRAL_SQUARES: [(usize, usize); 4] = [(4, 4), (4, 5), (5, 4), (5, 5)];

/// The next square a track runs into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackStep {
    pub x: usize,
    pub y: usize,
    /// Position on the next square the track enters by.
    pub entry: u8,
    pub kind: SquareKind,
}

/// Game board.
///
/// ## Example
///
/// ```
/// use track_insanity::board::{Board, SquareKind};
///
/// let mut board = Board::new();
/// board.populate_stations(2).unwrap();
///
/// assert_eq!(board.square(0, 0).unwrap().kind, SquareKind::Corner);
/// assert_eq!(board.square(4, 5).unwrap().kind, SquareKind::CentralStation);
/// assert!(board.square(1, 0).unwrap().train.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[BoardSquare; BOARD_HEIGHT]; BOARD_WIDTH],
    legal: [[bool; BOARD_HEIGHT]; BOARD_WIDTH],
    track_status: [TrackStatus; NUM_STATIONS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board: no trains, no tiles, nothing legal.
    #[must_use]
    pub fn new() -> Self {
        let mut squares = [[BoardSquare::of_kind(SquareKind::Playable); BOARD_HEIGHT]; BOARD_WIDTH];

        for i in 1..BOARD_WIDTH - 1 {
            squares[i][0].kind = SquareKind::Station;
            squares[i][BOARD_HEIGHT - 1].kind = SquareKind::Station;
        }
        for j in 1..BOARD_HEIGHT - 1 {
            squares[0][j].kind = SquareKind::Station;
            squares[BOARD_WIDTH - 1][j].kind = SquareKind::Station;
        }
        for (x, y) in CENTRAL_SQUARES {
            squares[x][y].kind = SquareKind::CentralStation;
        }
        for (x, y) in Self::corners() {
            squares[x][y].kind = SquareKind::Corner;
        }

        Self {
            squares,
            legal: [[false; BOARD_HEIGHT]; BOARD_WIDTH],
            track_status: [TrackStatus::NotComplete; NUM_STATIONS],
        }
    }

    fn corners() -> [(usize, usize); 4] {
        [
            (0, 0),
            (0, BOARD_HEIGHT - 1),
            (BOARD_WIDTH - 1, 0),
            (BOARD_WIDTH - 1, BOARD_HEIGHT - 1),
        ]
    }

    fn in_bounds(x: usize, y: usize) -> bool {
        x < BOARD_WIDTH && y < BOARD_HEIGHT
    }

    /// Put each player's trains on their stations.
    pub fn populate_stations(&mut self, player_count: usize) -> Result<(), BoardError> {
        // Validate before touching any square.
        stations::station_owner(player_count, StationId::new(0))?;

        for station in StationId::all() {
            let owner = stations::station_owner(player_count, station)?;
            if let Some(info) = stations::station_info(station) {
                self.squares[info.x][info.y].train = owner;
            }
        }
        Ok(())
    }

    /// Read access to a square.
    #[must_use]
    pub fn square(&self, x: usize, y: usize) -> Option<&BoardSquare> {
        self.squares.get(x)?.get(y)
    }

    /// Tile placed at a square, if any.
    #[must_use]
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileId> {
        self.square(x, y)?.tile
    }

    /// Train waiting at a station.
    #[must_use]
    pub fn train_at(&self, station: StationId) -> Option<PlayerId> {
        let info = stations::station_info(station)?;
        self.squares[info.x][info.y].train
    }

    /// Remove the train from a station once its track has been scored.
    pub fn clear_train(&mut self, station: StationId) -> Result<(), BoardError> {
        let info = stations::station_info(station).ok_or(BoardError::InvalidStation(station.raw()))?;
        self.squares[info.x][info.y].train = None;
        Ok(())
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn played_tile_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| s.kind == SquareKind::PlayedTile)
            .count()
    }

    /// Follow a track leaving square `(x, y)` by position `exit`.
    ///
    /// Returns `None` for an exit outside `0..8` or a step off the board.
    #[must_use]
    pub fn find_next_track_section(&self, x: usize, y: usize, exit: u8) -> Option<TrackStep> {
        let (nx, ny, entry) = match exit {
            0 => (Some(x), y.checked_sub(1), 5),
            1 => (Some(x), y.checked_sub(1), 4),
            2 => (x.checked_add(1), Some(y), 7),
            3 => (x.checked_add(1), Some(y), 6),
            4 => (Some(x), y.checked_add(1), 1),
            5 => (Some(x), y.checked_add(1), 0),
            6 => (x.checked_sub(1), Some(y), 3),
            7 => (x.checked_sub(1), Some(y), 2),
            _ => return None,
        };
        let (nx, ny) = (nx?, ny?);
        let square = self.square(nx, ny)?;
        Some(TrackStep {
            x: nx,
            y: ny,
            entry,
            kind: square.kind,
        })
    }

    /// Recompute the legality mask for `tile` and return the number of legal
    /// squares.
    ///
    /// `unplayed` is the number of tiles still in the bag; with an empty bag
    /// and no legal square, every empty playable square becomes legal.
    pub fn mark_legal_moves(&mut self, tile: &TileInstance, unplayed: usize) -> usize {
        let exit = |entry: usize| tile.exits[entry];

        for column in &mut self.legal {
            column.fill(true);
        }

        // Perimeter and hubs never hold tiles.
        for x in 0..BOARD_WIDTH {
            self.legal[x][0] = false;
            self.legal[x][BOARD_HEIGHT - 1] = false;
        }
        for y in 0..BOARD_HEIGHT {
            self.legal[0][y] = false;
            self.legal[BOARD_WIDTH - 1][y] = false;
        }
        for (x, y) in CENTRAL_SQUARES {
            self.legal[x][y] = false;
        }

        for x in 1..BOARD_WIDTH - 1 {
            for y in 1..BOARD_HEIGHT - 1 {
                if self.squares[x][y].kind == SquareKind::PlayedTile {
                    self.legal[x][y] = false;
                }
            }
        }

        // Inner squares need an orthogonal neighbour holding a tile.
        let squares = &self.squares;
        let played = |nx: usize, ny: usize| squares[nx][ny].kind == SquareKind::PlayedTile;
        for x in 2..BOARD_WIDTH - 2 {
            for y in 2..BOARD_HEIGHT - 2 {
                if !played(x + 1, y) && !played(x - 1, y) && !played(x, y - 1) && !played(x, y + 1) {
                    self.legal[x][y] = false;
                }
            }
        }

        // One-point tracks along the edges.
        for x in 0..BOARD_WIDTH - 1 {
            if exit(0) == 1 {
                self.legal[x][1] = false;
            }
            if exit(5) == 4 {
                self.legal[x][BOARD_HEIGHT - 2] = false;
            }
        }
        for y in 0..BOARD_HEIGHT - 1 {
            if exit(3) == 2 {
                self.legal[BOARD_WIDTH - 2][y] = false;
            }
            if exit(7) == 6 {
                self.legal[1][y] = false;
            }
        }

        // One-point tracks around the corners.
        if exit(6) == 1 || exit(0) == 7 {
            self.legal[1][1] = false;
        }
        if exit(2) == 1 || exit(3) == 0 {
            self.legal[BOARD_WIDTH - 2][1] = false;
        }
        if exit(4) == 3 || exit(5) == 2 {
            self.legal[BOARD_WIDTH - 2][BOARD_HEIGHT - 2] = false;
        }
        if exit(5) == 6 || exit(4) == 7 {
            self.legal[1][BOARD_HEIGHT - 2] = false;
        }

        let count = self.legal_move_count();
        if count > 0 || unplayed > 0 {
            return count;
        }

        for x in 1..BOARD_WIDTH - 1 {
            for y in 1..BOARD_HEIGHT - 1 {
                if self.squares[x][y].kind == SquareKind::Playable {
                    self.legal[x][y] = true;
                }
            }
        }
        self.legal_move_count()
    }

    /// Is `(x, y)` legal under the last `mark_legal_moves` call?
    #[must_use]
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        Self::in_bounds(x, y) && self.legal[x][y]
    }

    #[must_use]
    pub fn legal_move_count(&self) -> usize {
        self.legal.iter().flatten().filter(|&&legal| legal).count()
    }

    /// Legal squares, column by column.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_HEIGHT {
                if self.legal[x][y] {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    /// Place a tile on a legal, empty, playable square.
    ///
    /// Nothing changes when an error is returned.
    pub fn place_tile(&mut self, x: usize, y: usize, tile: TileId) -> Result<(), BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        let square = &self.squares[x][y];
        if square.kind == SquareKind::PlayedTile || square.tile.is_some() {
            return Err(BoardError::Occupied { x, y });
        }
        if square.kind != SquareKind::Playable {
            return Err(BoardError::NotPlayable { x, y });
        }
        if !self.legal[x][y] {
            return Err(BoardError::IllegalMove { x, y });
        }

        let square = &mut self.squares[x][y];
        square.kind = SquareKind::PlayedTile;
        square.tile = Some(tile);
        Ok(())
    }

    /// Take a tile back off the board.
    pub fn remove_tile(&mut self, x: usize, y: usize) -> Result<TileId, BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        let square = &mut self.squares[x][y];
        if square.kind != SquareKind::PlayedTile {
            return Err(BoardError::NoTile { x, y });
        }
        let tile = square.tile.take().ok_or(BoardError::NoTile { x, y })?;
        square.kind = SquareKind::Playable;
        Ok(tile)
    }

    #[must_use]
    pub fn track_status(&self, station: StationId) -> Option<TrackStatus> {
        self.track_status.get(station.index()).copied()
    }

    pub fn set_track_status(&mut self, station: StationId, status: TrackStatus) -> Result<(), BoardError> {
        let slot = self
            .track_status
            .get_mut(station.index())
            .ok_or(BoardError::InvalidStation(station.raw()))?;
        *slot = status;
        Ok(())
    }
}

impl fmt::Display for Board {
    /// One row per line: `#` corner, `S`/digit station (digit = train
    /// owner), `C` central station, `.` empty, `T` tile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let square = &self.squares[x][y];
                let c = match (square.kind, square.train) {
                    (SquareKind::Station, Some(player)) => {
                        char::from_digit(u32::from(player.0) + 1, 10).unwrap_or('S')
                    }
                    (SquareKind::Station, None) => 'S',
                    (SquareKind::CentralStation, _) => 'C',
                    (SquareKind::Playable, _) => '.',
                    (SquareKind::Corner, _) => '#',
                    (SquareKind::PlayedTile, _) => 'T',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
