//! Error types for every fallible engine operation.
//!
//! Errors fall into three groups:
//! - **Range errors**: an id or coordinate outside its valid domain.
//! - **Illegal-state errors**: the operation is not valid right now
//!   (drawing from an empty pool, placing on an occupied square, ...).
//!   No state is mutated when one of these is returned.
//! - **Invariant violations**: the track graph is corrupt
//!   ([`ScoreError::InfiniteLoop`]). These should be unreachable.
//!
//! All of them are recoverable from the caller's point of view.

use thiserror::Error;

use super::action::MoveKind;
use super::player::PlayerId;
use crate::board::StationId;
use crate::tiles::TileId;

/// Errors from tile definitions and tile lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile id {0} is outside the pool")]
    OutOfRange(usize),
    #[error("exit position {0} is outside 0..8")]
    InvalidExit(u8),
}

/// Errors from drawing and returning tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("no unplayed tiles remain in the pool")]
    Empty,
    #[error("no tiles have been played")]
    NothingPlayed,
    #[error("{0} has already left the pool")]
    AlreadyPlayed(TileId),
    #[error("{0} is already in the pool")]
    AlreadyUnplayed(TileId),
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Errors from board setup, placement and removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("player count {0} is outside 2..=6")]
    InvalidPlayerCount(usize),
    #[error("station {0} does not exist")]
    InvalidStation(u8),
    #[error("({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("({x}, {y}) cannot hold a tile")]
    NotPlayable { x: usize, y: usize },
    #[error("({x}, {y}) is not a legal move for the current tile")]
    IllegalMove { x: usize, y: usize },
    #[error("({x}, {y}) already holds a tile")]
    Occupied { x: usize, y: usize },
    #[error("({x}, {y}) holds no tile")]
    NoTile { x: usize, y: usize },
}

/// Errors from tracing a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("{0} is not a station square")]
    NotAStation(StationId),
    #[error("no train is waiting at {0}")]
    NoTrain(StationId),
    #[error("track from {0} does not reach a station")]
    Incomplete(StationId),
    #[error("track from {0} exceeded the segment limit")]
    InfiniteLoop(StationId),
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Errors from game-level operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count {0} is outside 2..=6")]
    InvalidPlayerCount(usize),
    #[error("setup lists {listed} players but {requested} were requested")]
    MissingPlayerSetup { requested: usize, listed: usize },
    #[error("volume {0} is outside 0..=9")]
    InvalidVolume(u8),
    #[error("seat {0} is in play but has no controller")]
    UncontrolledSeat(usize),
    #[error("{0} is not seated in this game")]
    InvalidPlayer(PlayerId),
    #[error("no players have been configured")]
    NotStarted,
    #[error("{0} holds no tile in that slot")]
    NoTileHeld(PlayerId),
    #[error("{0} already holds two tiles")]
    HandFull(PlayerId),
    #[error("no target square has been selected")]
    NoTargetSelected,
    #[error("{0:?} move is missing its slot or target")]
    IncompleteMove(MoveKind),
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BoardError::Occupied { x: 3, y: 4 };
        assert_eq!(err.to_string(), "(3, 4) already holds a tile");

        let err = PoolError::AlreadyUnplayed(TileId::new(7));
        assert_eq!(err.to_string(), "Tile(7) is already in the pool");
    }

    #[test]
    fn test_game_error_wraps_sources() {
        let err: GameError = PoolError::Empty.into();
        assert_eq!(err, GameError::Pool(PoolError::Empty));
        assert_eq!(err.to_string(), "no unplayed tiles remain in the pool");

        let err: GameError = ScoreError::InfiniteLoop(StationId::new(3)).into();
        assert!(matches!(err, GameError::Score(ScoreError::InfiniteLoop(_))));
    }
}
