//! Game state captured for one computer decision.
//!
//! The snapshot owns its own board and bag, so the evaluation can place and
//! remove candidate tiles freely while the live game stays untouched.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{GameError, HeldSlot, PlayerId, SkillLevel};
use crate::game::Game;
use crate::tiles::{TileId, TilePool};

/// Everything the computer player looks at when choosing a move.
#[derive(Clone, Debug)]
pub struct AiSnapshot {
    pub board: Board,
    pub pool: TilePool,
    /// Player to move.
    pub player: PlayerId,
    pub player_count: usize,
    pub skill: SkillLevel,
    /// Held tiles, primary first.
    pub held: SmallVec<[(HeldSlot, TileId); 2]>,
    /// Has the player already drawn this turn?
    pub has_drawn: bool,
}

impl AiSnapshot {
    /// Copy the parts of the game the decision depends on.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        let current = game.current();
        Self {
            board: game.board().clone(),
            pool: game.pool().clone(),
            player: game.current_player(),
            player_count: game.player_count(),
            skill: current.skill,
            held: current.held_tiles(),
            has_drawn: game.player_has_drawn(),
        }
    }

    /// Tiles still in the bag.
    #[must_use]
    pub fn unplayed(&self) -> usize {
        self.pool.num_unplayed_tiles()
    }

    /// Mark the legal squares for a held tile on the scratch board.
    pub fn mark_legal_moves(&mut self, tile: TileId) -> Result<usize, GameError> {
        let instance = self.pool.get_tile(tile)?;
        Ok(self
            .board
            .mark_legal_moves(instance, self.pool.num_unplayed_tiles()))
    }
}
