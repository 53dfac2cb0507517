//! Board: squares, stations, legal moves, and tile placement.
//!
//! - `Board`: the 10×10 grid with its legality mask and track status
//! - `BoardSquare` / `SquareKind`: what each square holds
//! - `StationId` and the station helpers: perimeter geometry and ownership

pub mod grid;
pub mod square;
pub mod stations;

pub use grid::{Board, TrackStep, BOARD_HEIGHT, BOARD_WIDTH, CENTRAL_SQUARES};
pub use square::{BoardSquare, SquareKind, TrackStatus};
pub use stations::{
    station_info, station_number, station_owner, stations_owned_by, StationId, StationInfo,
    NUM_STATIONS,
};
