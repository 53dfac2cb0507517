//! Computer player: move evaluation and skill-based selection.
//!
//! ## Pipeline
//!
//! 1. `AiSnapshot::capture` copies the board, bag and hand of the player to
//!    move.
//! 2. `analyze_moves` values every legal placement of every held tile.
//! 3. The player's `SkillLevel` picks one of the ranked candidates.
//! 4. `ComputerAi::determine_next_move` turns that into a `MovePacket`,
//!    which the game applies with `apply_computer_move`.

pub mod computer;
pub mod config;
pub mod eval;
pub mod policy;
pub mod snapshot;

pub use computer::ComputerAi;
pub use config::EvalWeights;
pub use eval::{analyze_moves, rank, MoveEval};
pub use policy::SelectionPolicy;
pub use snapshot::AiSnapshot;
