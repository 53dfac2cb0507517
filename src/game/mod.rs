//! Game: the roster, turn state machine, move application, and scoring.

pub mod engine;
pub mod state;

pub use engine::Game;
pub use state::TurnState;
