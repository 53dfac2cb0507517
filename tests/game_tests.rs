//! Game flow integration tests: setup, turn handling and computer turns.

use track_insanity::ai::ComputerAi;
use track_insanity::board::{StationId, TrackStatus};
use track_insanity::core::{
    ControlKind, GameError, GameOptions, GameSetup, HeldSlot, LastMoveHighlight, MoveKind,
    PlayerId, PlayerSetup, SkillLevel,
};
use track_insanity::game::{Game, TurnState};
use track_insanity::tiles::TileId;

const TOTAL_TILES: usize = 60;

fn computer_game(players: usize, seed: u64, skill: SkillLevel) -> Game {
    let mut game = Game::new(seed);
    game.init_players_from_ui(&GameSetup::new(players).all_computers().with_skill(skill))
        .unwrap();
    game.change_state(TurnState::NextPlayerTurn).unwrap();
    game
}

fn assert_tiles_conserved(game: &Game) {
    let held: usize = game.active_players().map(|(_, p)| p.tile_count()).sum();
    let on_board = game.board().played_tile_count();
    assert_eq!(on_board + held + game.pool().num_unplayed_tiles(), TOTAL_TILES);
    assert_eq!(on_board + held, game.pool().num_played_tiles());
}

fn assert_scores_match_processed_tracks(game: &Game) {
    let processed = StationId::all()
        .filter(|&s| game.board().track_status(s) == Some(TrackStatus::Processed))
        .collect::<Vec<_>>();
    let credited: u32 = game.active_players().map(|(_, p)| p.stations_complete).sum();
    let unowned = processed
        .iter()
        .filter(|&&s| track_insanity::board::station_owner(game.player_count(), s).unwrap().is_none())
        .count();
    assert_eq!(credited as usize + unowned, processed.len());

    for station in processed {
        assert_eq!(game.board().train_at(station), None);
    }
}

// =============================================================================
// Setup Tests
// =============================================================================

#[test]
fn test_setup_from_json() {
    let json = r#"{
        "player_count": 3,
        "players": [
            { "control": "Human", "avatar_id": 2 },
            { "control": "Computer" },
            { "control": "Computer", "avatar_id": 5 }
        ],
        "ai_skill": "Hard",
        "options": { "show_last_move": "LastPlayer", "music_volume": 0 }
    }"#;
    let setup: GameSetup = serde_json::from_str(json).unwrap();
    assert_eq!(setup.options.show_last_move, LastMoveHighlight::LastPlayer);
    assert_eq!(setup.options.effects_volume, GameOptions::default().effects_volume);

    let mut game = Game::new(8);
    game.init_players_from_ui(&setup).unwrap();
    assert_eq!(game.player_count(), 3);
    assert_eq!(game.stations_per_player(), 10);
    assert_eq!(game.players()[PlayerId::new(0)].control, ControlKind::Human);
    assert_eq!(game.players()[PlayerId::new(0)].avatar_id, 2);
    assert_eq!(game.players()[PlayerId::new(1)].avatar_id, 0);
    assert_eq!(game.players()[PlayerId::new(2)].skill, SkillLevel::Hard);
    assert_eq!(game.options().music_volume, 0);
}

#[test]
fn test_setup_with_too_few_seats() {
    let json = r#"{ "player_count": 3, "players": [ { "control": "Human" } ] }"#;
    let setup: GameSetup = serde_json::from_str(json).unwrap();

    let mut game = Game::new(8);
    assert_eq!(
        game.init_players_from_ui(&setup),
        Err(GameError::MissingPlayerSetup { requested: 3, listed: 1 })
    );
}

#[test]
fn test_setup_with_uncontrolled_seat() {
    let json = r#"{
        "player_count": 2,
        "players": [ { "control": "Human" }, { "control": "Nobody" } ]
    }"#;
    let setup: GameSetup = serde_json::from_str(json).unwrap();

    let mut game = Game::new(8);
    assert_eq!(
        game.init_players_from_ui(&setup),
        Err(GameError::UncontrolledSeat(1))
    );
    assert_eq!(game.player_count(), 0);
    assert_eq!(
        game.change_state(TurnState::NextPlayerTurn),
        Err(GameError::NotStarted)
    );
}

#[test]
fn test_reconfigure_starts_over() {
    let mut game = computer_game(4, 12, SkillLevel::Easy);
    let ai = ComputerAi::default();
    ai.take_turn(&mut game).unwrap();
    assert!(!game.history().is_empty());

    game.init_players_from_ui(&GameSetup::new(2)).unwrap();
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.turn_number(), 1);
    assert!(game.history().is_empty());
    assert_eq!(game.pool().num_unplayed_tiles(), TOTAL_TILES);
    assert_eq!(game.board().played_tile_count(), 0);
    assert!(game.players().iter().all(|(_, p)| p.tile_count() == 0));
}

// =============================================================================
// Turn Flow Tests
// =============================================================================

#[test]
fn test_human_then_computer() {
    let mut game = Game::new(31);
    game.init_players_from_ui(&GameSetup::new(2)).unwrap();

    game.change_state(TurnState::NextPlayerTurn).unwrap();
    assert_eq!(game.state(), TurnState::SelectAction);
    assert!(game.current().is_human());

    game.change_state(TurnState::TileDraw).unwrap();
    game.change_state(TurnState::Pass).unwrap();

    // The computer's turn starts by itself.
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.state(), TurnState::ComputerMove);

    let ai = ComputerAi::default();
    ai.take_turn(&mut game).unwrap();
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.state(), TurnState::SelectAction);
    assert_eq!(game.turn_number(), 3);
}

#[test]
fn test_hand_never_exceeds_two_tiles() {
    let mut game = Game::new(4);
    game.init_players_from_ui(&GameSetup::new(2).with_player(1, PlayerSetup::human(1)))
        .unwrap();

    game.draw_tile().unwrap();
    game.draw_tile().unwrap();
    assert_eq!(game.draw_tile(), Err(GameError::HandFull(PlayerId::new(0))));
    assert_eq!(game.current().tile_count(), 2);
    assert_eq!(game.pool().num_unplayed_tiles(), TOTAL_TILES - 2);
}

#[test]
fn test_deal_to_unseated_player_is_rejected() {
    let mut game = computer_game(2, 17, SkillLevel::Hard);

    for id in [2, 5, 9] {
        let player = PlayerId::new(id);
        assert_eq!(
            game.deal_tile(player, TileId::new(2)),
            Err(GameError::InvalidPlayer(player))
        );
    }
    assert_eq!(game.pool().num_unplayed_tiles(), TOTAL_TILES);
    assert_eq!(game.deal_tile(PlayerId::new(1), TileId::new(2)), Ok(HeldSlot::Primary));
}

#[test]
fn test_discard_reserve_through_computer_move() {
    let mut game = computer_game(2, 17, SkillLevel::Hard);
    game.deal_tile(PlayerId::new(0), TileId::new(0)).unwrap();
    game.deal_tile(PlayerId::new(0), TileId::new(1)).unwrap();

    let ai = ComputerAi::default();
    let moves = ai.take_turn(&mut game).unwrap();
    let kinds: Vec<MoveKind> = moves.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MoveKind::Discard, MoveKind::EndTurn]);

    let player = &game.players()[PlayerId::new(0)];
    assert_eq!(player.primary, Some(TileId::new(0)));
    assert_eq!(player.reserve, None);
    assert_eq!(game.pool().num_unplayed_tiles(), TOTAL_TILES - 1);
}

#[test]
fn test_incomplete_computer_move_is_rejected() {
    let mut game = computer_game(2, 17, SkillLevel::Hard);
    let mut packet = track_insanity::core::MovePacket::play(HeldSlot::Primary, 1, 1);
    packet.target = None;

    assert_eq!(
        game.apply_computer_move(&packet),
        Err(GameError::IncompleteMove(MoveKind::Play))
    );
}

#[test]
fn test_history_records_every_action() {
    let mut game = computer_game(3, 77, SkillLevel::Medium);
    let ai = ComputerAi::default();

    let mut applied = Vec::new();
    for _ in 0..9 {
        let turn = game.turn_number();
        let player = game.current_player();
        for packet in ai.take_turn(&mut game).unwrap() {
            applied.push((player, packet, turn));
        }
    }

    let recorded: Vec<_> = game
        .history()
        .iter()
        .map(|r| (r.player, r.packet, r.turn))
        .collect();
    // Each turn's EndTurn is recorded once, by the state machine.
    let expected: Vec<_> = applied
        .into_iter()
        .filter(|(_, p, _)| p.kind != MoveKind::EndTurn)
        .collect();
    let recorded_moves: Vec<_> = recorded
        .iter()
        .copied()
        .filter(|(_, p, _)| p.kind != MoveKind::EndTurn)
        .collect();
    assert_eq!(recorded_moves, expected);
    assert_eq!(
        recorded.iter().filter(|(_, p, _)| p.kind == MoveKind::EndTurn).count(),
        9
    );
}

// =============================================================================
// Computer Game Tests
// =============================================================================

#[test]
fn test_computer_games_keep_invariants() {
    let ai = ComputerAi::default();

    for (players, seed, skill) in [
        (2, 1, SkillLevel::Hard),
        (3, 2, SkillLevel::Medium),
        (4, 3, SkillLevel::Easy),
        (6, 4, SkillLevel::Hard),
    ] {
        let mut game = computer_game(players, seed, skill);
        for _ in 0..120 {
            if game.state() == TurnState::GameFinished {
                break;
            }
            ai.take_turn(&mut game).unwrap();
            assert_tiles_conserved(&game);
            assert_scores_match_processed_tracks(&game);
            assert!(game.active_players().all(|(_, p)| p.tile_count() <= 2));
        }

        assert_eq!(
            game.result().is_some(),
            game.state() == TurnState::GameFinished
        );
    }
}

#[test]
fn test_same_seed_same_game() {
    let ai = ComputerAi::default();
    let mut first = computer_game(4, 99, SkillLevel::Medium);
    let mut second = computer_game(4, 99, SkillLevel::Medium);

    for _ in 0..40 {
        ai.take_turn(&mut first).unwrap();
        ai.take_turn(&mut second).unwrap();
    }

    assert_eq!(first.board(), second.board());
    assert_eq!(first.history(), second.history());
    assert_eq!(first.standings(), second.standings());
}

#[test]
fn test_snapshot_is_independent() {
    let ai = ComputerAi::default();
    let mut game = computer_game(2, 5, SkillLevel::Hard);
    ai.take_turn(&mut game).unwrap();

    let snapshot = game.snapshot();
    for _ in 0..6 {
        ai.take_turn(&mut game).unwrap();
    }

    assert_eq!(snapshot.turn_number(), 2);
    assert!(snapshot.history().len() < game.history().len());
}
