//! Core engine types: players, moves, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the game state machine
//! and the computer player.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{HeldSlot, MoveKind, MovePacket, MoveRecord};
pub use config::{GameOptions, GameSetup, LastMoveHighlight, PlayerSetup, SkillLevel, MAX_VOLUME};
pub use error::{BoardError, GameError, PoolError, ScoreError, TileError};
pub use player::{ControlKind, Player, PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
