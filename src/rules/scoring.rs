//! Track tracing and scoring.
//!
//! A train leaves its station, runs through every placed tile along the
//! track, and stops at the first square that is not a tile. Each tile
//! passed scores one point; ending on a central station doubles the total.
//!
//! ## Modes
//!
//! - **Live** (`pass_through == None`): only finished tracks score. A track
//!   that stops on an empty square is `ScoreError::Incomplete`.
//! - **Evaluation** (`pass_through == Some(tile)`): used by the computer
//!   player. Unfinished tracks are reported as `Destination::Incomplete`
//!   and the result records whether the track runs through `tile`.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::board::{station_info, Board, SquareKind, StationId};
use crate::core::error::ScoreError;
use crate::tiles::{TileId, TilePool};

/// Longest track followed before the walk is declared a loop.
pub const SEGMENT_LIMIT: u32 = 255;

/// Where a track stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Station,
    CentralStation,
    /// Stopped on an empty square (evaluation mode only).
    Incomplete,
}

/// Result of tracing one station's track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackScore {
    /// Points, doubled for central stations.
    pub score: u32,
    /// Tiles the track runs through.
    pub segments: u32,
    /// Did the track run through the pass-through tile?
    pub passed_through: bool,
    pub destination: Destination,
}

/// Trace the track leaving `station`.
///
/// ## Example
///
/// ```
/// use track_insanity::board::{Board, StationId};
/// use track_insanity::core::ScoreError;
/// use track_insanity::rules::calculate_track_score;
/// use track_insanity::tiles::TilePool;
///
/// let mut board = Board::new();
/// board.populate_stations(2).unwrap();
/// let pool = TilePool::standard();
///
/// // No tiles yet: nothing is finished.
/// let result = calculate_track_score(&board, &pool, StationId::new(0), None);
/// assert_eq!(result, Err(ScoreError::Incomplete(StationId::new(0))));
/// ```
pub fn calculate_track_score(
    board: &Board,
    pool: &TilePool,
    station: StationId,
    pass_through: Option<TileId>,
) -> Result<TrackScore, ScoreError> {
    let info = station_info(station).ok_or(ScoreError::NotAStation(station))?;
    let start = board
        .square(info.x, info.y)
        .ok_or(ScoreError::NotAStation(station))?;
    if start.kind != SquareKind::Station {
        return Err(ScoreError::NotAStation(station));
    }
    if start.train.is_none() {
        return Err(ScoreError::NoTrain(station));
    }

    let mut step = board
        .find_next_track_section(info.x, info.y, info.exit)
        .ok_or(ScoreError::Incomplete(station))?;
    let mut segments = 0;
    let mut passed_through = false;

    while step.kind == SquareKind::PlayedTile && segments < SEGMENT_LIMIT {
        let tile = board
            .tile_at(step.x, step.y)
            .ok_or(ScoreError::Incomplete(station))?;
        if pass_through == Some(tile) {
            passed_through = true;
        }
        segments += 1;

        let exit = pool.find_exit(tile, step.entry)?;
        step = board
            .find_next_track_section(step.x, step.y, exit)
            .ok_or(ScoreError::Incomplete(station))?;
    }

    if segments >= SEGMENT_LIMIT {
        error!(%station, segments, "track walk exceeded the segment limit");
        return Err(ScoreError::InfiniteLoop(station));
    }

    let (destination, score) = match step.kind {
        SquareKind::Station => (Destination::Station, segments),
        SquareKind::CentralStation => (Destination::CentralStation, segments * 2),
        _ if pass_through.is_none() => return Err(ScoreError::Incomplete(station)),
        _ => (Destination::Incomplete, segments),
    };

    Ok(TrackScore {
        score,
        segments,
        passed_through,
        destination,
    })
}
