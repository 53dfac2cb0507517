//! # track-insanity
//!
//! Rules engine and computer opponent for TrackInsanity, a tile-laying game
//! for 2 to 6 players.
//!
//! Every player owns trains waiting at stations around the edge of a 10×10
//! board. Players take turns placing square track tiles; each tile wires its
//! eight edge positions into four connections. A track is finished once it
//! reaches another station (one point per tile) or one of the four central
//! stations (double points).
//!
//! ## Design Principles
//!
//! 1. **Value Types**: `Board`, `TilePool` and `Game` are plain owned
//!    values. Look-ahead works on a clone, never on the live game.
//!
//! 2. **Typed Errors**: Every rule violation comes back as a `Result` error;
//!    the library never panics on bad input.
//!
//! 3. **Deterministic**: Tile draws come from a seeded `GameRng`, so a seed
//!    and a sequence of moves replay a match exactly.
//!
//! ## Modules
//!
//! - `core`: Players, moves, RNG, setup options, errors
//! - `tiles`: Tile catalog and the bag of physical tiles
//! - `board`: The grid, stations, legal moves and placement
//! - `rules`: Track scoring and final results
//! - `game`: The turn state machine
//! - `ai`: Computer player
//!
//! ## Example
//!
//! ```
//! use track_insanity::{ComputerAi, Game, GameSetup, TurnState};
//!
//! let mut game = Game::new(2024);
//! game.init_players_from_ui(&GameSetup::new(3).all_computers()).unwrap();
//! game.change_state(TurnState::NextPlayerTurn).unwrap();
//!
//! let ai = ComputerAi::default();
//! for _ in 0..6 {
//!     ai.take_turn(&mut game).unwrap();
//! }
//! assert_eq!(game.turn_number(), 7);
//! ```

pub mod core;
pub mod tiles;
pub mod board;
pub mod rules;
pub mod game;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player, ControlKind,
    GameRng,
    GameSetup, PlayerSetup, GameOptions, SkillLevel, LastMoveHighlight,
    MoveKind, MovePacket, MoveRecord, HeldSlot,
    TileError, PoolError, BoardError, ScoreError, GameError,
};

pub use crate::tiles::{TileId, DefinitionId, TileDefinition, TileCatalog, TilePool, TileInstance};

pub use crate::board::{Board, BoardSquare, SquareKind, TrackStatus, StationId, StationInfo};

pub use crate::rules::{calculate_track_score, Destination, TrackScore, GameResult, Standing};

pub use crate::game::{Game, TurnState};

pub use crate::ai::{ComputerAi, EvalWeights, MoveEval, SelectionPolicy, AiSnapshot};
