//! The computer player.
//!
//! Each decision is made on an `AiSnapshot`, so the live game is only ever
//! changed by applying the returned packet.

use tracing::debug;

use super::config::EvalWeights;
use super::eval::{analyze_moves, rank, MoveEval};
use super::policy::SelectionPolicy;
use super::snapshot::AiSnapshot;
use crate::core::{GameError, HeldSlot, MoveKind, MovePacket};
use crate::game::{Game, TurnState};

/// Computer opponent driven by the track-value heuristic.
///
/// ## Example
///
/// ```
/// use track_insanity::ai::ComputerAi;
/// use track_insanity::core::{GameSetup, MoveKind};
/// use track_insanity::game::{Game, TurnState};
///
/// let mut game = Game::new(7);
/// game.init_players_from_ui(&GameSetup::new(2).all_computers()).unwrap();
/// game.change_state(TurnState::NextPlayerTurn).unwrap();
/// assert_eq!(game.state(), TurnState::ComputerMove);
///
/// // Empty hand at the start: the first move is always a draw.
/// let ai = ComputerAi::default();
/// let packet = ai.determine_next_move(&game, None).unwrap();
/// assert_eq!(packet.kind, MoveKind::Draw);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComputerAi {
    weights: EvalWeights,
}

impl ComputerAi {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Decide the current player's next action.
    ///
    /// `last_move` is the previous packet returned during this turn, if
    /// any. Anything other than a draw finishes the turn.
    pub fn determine_next_move(
        &self,
        game: &Game,
        last_move: Option<&MovePacket>,
    ) -> Result<MovePacket, GameError> {
        if game.player_count() == 0 {
            return Err(GameError::NotStarted);
        }
        if last_move.is_some_and(|m| m.kind.ends_turn()) {
            return Ok(MovePacket::end_turn());
        }

        let mut snap = AiSnapshot::capture(game);
        let ranked = self.rank_snapshot(&mut snap)?;
        let drawn = snap.has_drawn || last_move.is_some_and(|m| m.kind == MoveKind::Draw);
        let can_draw = snap.unplayed() > 0 && !drawn;

        let packet = match (snap.held.len(), ranked.is_empty()) {
            (0, _) | (1, true) if can_draw => MovePacket::draw(),
            (0, _) | (1, true) => MovePacket::end_turn(),
            (_, true) => MovePacket::discard(HeldSlot::Reserve),
            (_, false) => match snap.skill.select(&ranked) {
                Some(index) => {
                    let choice = ranked[index];
                    MovePacket::play(choice.slot, choice.x, choice.y)
                }
                None => MovePacket::end_turn(),
            },
        };

        debug!(
            player = %snap.player,
            held = snap.held.len(),
            candidates = ranked.len(),
            ?packet,
            "computer chose move"
        );
        Ok(packet)
    }

    /// Every placement of every held tile, best first.
    pub fn rank_moves(&self, game: &Game) -> Result<Vec<MoveEval>, GameError> {
        if game.player_count() == 0 {
            return Err(GameError::NotStarted);
        }
        let mut snap = AiSnapshot::capture(game);
        self.rank_snapshot(&mut snap)
    }

    fn rank_snapshot(&self, snap: &mut AiSnapshot) -> Result<Vec<MoveEval>, GameError> {
        let mut ranked = Vec::new();
        let held = snap.held.clone();
        for (slot, tile) in held {
            if snap.mark_legal_moves(tile)? == 0 {
                continue;
            }
            ranked.extend(analyze_moves(
                &mut snap.board,
                &snap.pool,
                tile,
                slot,
                snap.player,
                snap.player_count,
                &self.weights,
            )?);
        }
        rank(&mut ranked);
        Ok(ranked)
    }

    /// Play the current player's whole turn and hand over to the next.
    ///
    /// Returns the packets applied, ending with `EndTurn`. Does nothing once
    /// the game has finished.
    pub fn take_turn(&self, game: &mut Game) -> Result<Vec<MovePacket>, GameError> {
        if game.state() == TurnState::GameFinished {
            return Ok(Vec::new());
        }

        let mut moves = Vec::new();
        let mut last = None;
        loop {
            let packet = self.determine_next_move(game, last.as_ref())?;
            game.apply_computer_move(&packet)?;
            moves.push(packet);
            if packet.kind == MoveKind::EndTurn {
                break;
            }
            last = Some(packet);
        }

        game.change_state(TurnState::EndTurn)?;
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSetup, PlayerId, SkillLevel};
    use crate::tiles::TileId;

    fn computer_game(seed: u64) -> Game {
        let setup = GameSetup::new(2)
            .all_computers()
            .with_skill(SkillLevel::Hard);
        let mut game = Game::new(seed);
        game.init_players_from_ui(&setup).unwrap();
        game.change_state(TurnState::NextPlayerTurn).unwrap();
        game
    }

    #[test]
    fn test_not_started() {
        let game = Game::new(1);
        let ai = ComputerAi::default();
        assert_eq!(ai.determine_next_move(&game, None), Err(GameError::NotStarted));
    }

    #[test]
    fn test_turn_ending_moves_end_the_turn() {
        let game = computer_game(3);
        let ai = ComputerAi::default();
        for last in [
            MovePacket::play(HeldSlot::Primary, 1, 1),
            MovePacket::discard(HeldSlot::Reserve),
            MovePacket::end_turn(),
        ] {
            let packet = ai.determine_next_move(&game, Some(&last)).unwrap();
            assert_eq!(packet.kind, MoveKind::EndTurn);
        }
    }

    #[test]
    fn test_empty_hand_after_draw_ends_turn() {
        let game = computer_game(3);
        let ai = ComputerAi::default();
        let packet = ai.determine_next_move(&game, Some(&MovePacket::draw())).unwrap();
        assert_eq!(packet.kind, MoveKind::EndTurn);
    }

    #[test]
    fn test_unplayable_single_tile_draws() {
        let mut game = computer_game(3);
        // The U tile has no legal square on an empty board.
        game.deal_tile(PlayerId::new(0), TileId::new(0)).unwrap();

        let ai = ComputerAi::default();
        assert!(ai.rank_moves(&game).unwrap().is_empty());
        assert_eq!(ai.determine_next_move(&game, None).unwrap().kind, MoveKind::Draw);
        assert_eq!(
            ai.determine_next_move(&game, Some(&MovePacket::draw())).unwrap().kind,
            MoveKind::EndTurn
        );
    }

    #[test]
    fn test_two_unplayable_tiles_discard_reserve() {
        let mut game = computer_game(3);
        game.deal_tile(PlayerId::new(0), TileId::new(0)).unwrap();
        game.deal_tile(PlayerId::new(0), TileId::new(1)).unwrap();

        let ai = ComputerAi::default();
        let packet = ai.determine_next_move(&game, None).unwrap();
        assert_eq!(packet, MovePacket::discard(HeldSlot::Reserve));
    }

    #[test]
    fn test_playable_tile_is_played_on_a_legal_square() {
        let mut game = computer_game(3);
        game.deal_tile(PlayerId::new(0), TileId::new(2)).unwrap();

        let ai = ComputerAi::default();
        let ranked = ai.rank_moves(&game).unwrap();
        assert_eq!(ranked.len(), 28);

        let packet = ai.determine_next_move(&game, None).unwrap();
        assert_eq!(packet.kind, MoveKind::Play);
        assert_eq!(packet.slot, Some(HeldSlot::Primary));
        let (x, y) = packet.target.unwrap();
        assert!(ranked.iter().any(|m| (m.x, m.y) == (x, y)));
        // Hard takes the top of the list.
        assert_eq!((x, y), (ranked[0].x, ranked[0].y));
    }

    #[test]
    fn test_decision_leaves_game_untouched() {
        let mut game = computer_game(5);
        game.deal_tile(PlayerId::new(0), TileId::new(2)).unwrap();
        game.deal_tile(PlayerId::new(0), TileId::new(8)).unwrap();
        let board = game.board().clone();
        let unplayed = game.pool().num_unplayed_tiles();
        let history = game.history().len();

        let ai = ComputerAi::default();
        ai.determine_next_move(&game, None).unwrap();
        ai.rank_moves(&game).unwrap();

        assert_eq!(game.board(), &board);
        assert_eq!(game.pool().num_unplayed_tiles(), unplayed);
        assert_eq!(game.history().len(), history);
        assert_eq!(game.current().tile_count(), 2);
    }

    #[test]
    fn test_take_turn_hands_over() {
        let mut game = computer_game(9);
        let ai = ComputerAi::default();

        let moves = ai.take_turn(&mut game).unwrap();
        assert_eq!(moves.first().map(|m| m.kind), Some(MoveKind::Draw));
        assert_eq!(moves.last().map(|m| m.kind), Some(MoveKind::EndTurn));
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.state(), TurnState::ComputerMove);
    }
}
