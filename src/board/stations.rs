//! The 32 perimeter stations: numbering, geometry, and ownership.
//!
//! Stations are numbered clockwise starting at the top-left:
//!
//! - 0-7: top edge, left to right, trains leave downwards
//! - 8-15: right edge, top to bottom, trains leave to the left
//! - 16-23: bottom edge, right to left, trains leave upwards
//! - 24-31: left edge, bottom to top, trains leave to the right
//!
//! The ownership table fixes, for every player count, which player's train
//! starts at which station. Player numbers in the table are 1-based and 0
//! marks a station nobody owns (stations 15 and 16 in 3, 5 and 6 player
//! games).

use serde::{Deserialize, Serialize};

use crate::core::error::BoardError;
use crate::core::player::{PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// Number of perimeter stations.
pub const NUM_STATIONS: usize = 32;

const STATION_OWNERSHIP: [[u8; NUM_STATIONS]; MAX_PLAYERS - MIN_PLAYERS + 1] = [
    [2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1],
    [2, 1, 3, 2, 3, 2, 1, 3, 1, 3, 2, 1, 3, 1, 2, 0, 0, 3, 1, 2, 3, 1, 2, 3, 2, 3, 1, 2, 1, 3, 2, 1],
    [3, 4, 1, 2, 4, 3, 2, 1, 4, 3, 2, 1, 4, 3, 1, 2, 4, 3, 1, 2, 3, 4, 2, 1, 3, 4, 2, 1, 4, 3, 1, 2],
    [2, 4, 3, 5, 2, 1, 3, 5, 4, 2, 5, 1, 4, 2, 3, 0, 0, 1, 3, 5, 4, 2, 1, 5, 3, 4, 1, 2, 3, 4, 5, 1],
    [2, 1, 5, 3, 2, 4, 6, 3, 5, 2, 1, 6, 5, 3, 4, 0, 0, 1, 2, 4, 3, 6, 5, 4, 1, 3, 2, 6, 1, 5, 4, 6],
];

/// Perimeter station identifier (0-31).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(pub u8);

impl StationId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 32 stations in numbering order.
    pub fn all() -> impl Iterator<Item = StationId> {
        (0..NUM_STATIONS as u8).map(StationId)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// Where a station sits and the tile edge position its train leaves by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationInfo {
    pub x: usize,
    pub y: usize,
    pub exit: u8,
}

/// Board position and exit of a station. `None` for ids outside 0..32.
///
/// ```
/// use track_insanity::board::{station_info, StationId, StationInfo};
///
/// assert_eq!(station_info(StationId::new(0)), Some(StationInfo { x: 1, y: 0, exit: 5 }));
/// assert_eq!(station_info(StationId::new(16)), Some(StationInfo { x: 8, y: 9, exit: 1 }));
/// assert_eq!(station_info(StationId::new(32)), None);
/// ```
#[must_use]
pub fn station_info(station: StationId) -> Option<StationInfo> {
    let id = station.index();
    let info = match id {
        0..=7 => StationInfo { x: 1 + id, y: 0, exit: 5 },
        8..=15 => StationInfo { x: 9, y: 1 + (id - 8), exit: 7 },
        16..=23 => StationInfo { x: 8 - (id - 16), y: 9, exit: 1 },
        24..=31 => StationInfo { x: 0, y: 8 - (id - 24), exit: 3 },
        _ => return None,
    };
    Some(info)
}

/// Station at a board position. `None` for corners and anything off the
/// perimeter.
#[must_use]
pub fn station_number(x: usize, y: usize) -> Option<StationId> {
    let on_edge = |v: usize| (1..=8).contains(&v);
    let id = match (x, y) {
        (0, y) if on_edge(y) => 32 - y,
        (9, y) if on_edge(y) => 7 + y,
        (x, 0) if on_edge(x) => x - 1,
        (x, 9) if on_edge(x) => 24 - x,
        _ => return None,
    };
    Some(StationId(id as u8))
}

/// Owner of a station in a game with `player_count` players.
///
/// Returns `Ok(None)` for the unowned stations of 3, 5 and 6 player games.
pub fn station_owner(player_count: usize, station: StationId) -> Result<Option<PlayerId>, BoardError> {
    let row = ownership_row(player_count)?;
    let number = row
        .get(station.index())
        .copied()
        .ok_or(BoardError::InvalidStation(station.raw()))?;
    Ok(PlayerId::from_number(number))
}

/// The stations a player owns.
pub fn stations_owned_by(player_count: usize, player: PlayerId) -> Result<Vec<StationId>, BoardError> {
    let row = ownership_row(player_count)?;
    Ok(StationId::all()
        .filter(|s| PlayerId::from_number(row[s.index()]) == Some(player))
        .collect())
}

fn ownership_row(player_count: usize) -> Result<&'static [u8; NUM_STATIONS], BoardError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(BoardError::InvalidPlayerCount(player_count));
    }
    Ok(&STATION_OWNERSHIP[player_count - MIN_PLAYERS])
}
