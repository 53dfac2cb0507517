//! Turn states of the game state machine.

use serde::{Deserialize, Serialize};

/// Where the game is within a turn.
///
/// The presentation layer requests states with `Game::change_state`; some
/// states run their action and move on by themselves (see each variant).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No-op request.
    #[default]
    Default,
    /// A new player is up. Continues to `SelectAction` when only one human
    /// plays or the player is a computer.
    NextPlayerTurn,
    /// Waiting for the player to choose draw, play, discard or pass.
    /// Computer players continue to `ComputerMove`.
    SelectAction,
    /// Draw a tile into the hand, then back to `SelectAction`.
    TileDraw,
    /// Pick the tile to play and mark its legal squares.
    TileSelect,
    /// Place the selected tile on the selected square, then `EndTurn`.
    TilePlay,
    /// Give up the turn, then `EndTurn`.
    Pass,
    /// Return the selected tile to the bag, then `EndTurn`.
    Discard,
    /// Hand over to the next player, or finish the game.
    EndTurn,
    GameFinished,
    ConfirmExit,
    ShowBoard,
    /// The computer player is thinking; the caller drives it.
    ComputerMove,
    Pause,
}

impl TurnState {
    /// States that only record themselves and run no action.
    #[must_use]
    pub fn is_passive(self) -> bool {
        matches!(
            self,
            TurnState::GameFinished
                | TurnState::ConfirmExit
                | TurnState::ShowBoard
                | TurnState::ComputerMove
                | TurnState::Pause
        )
    }
}
