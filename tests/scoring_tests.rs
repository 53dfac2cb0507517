//! Track scoring integration tests.

use track_insanity::board::{Board, StationId, TrackStatus};
use track_insanity::core::{GameSetup, PlayerId, PlayerSetup, ScoreError};
use track_insanity::game::{Game, TurnState};
use track_insanity::rules::{calculate_track_score, Destination, GameResult};
use track_insanity::tiles::{TileId, TilePool};

fn board_for(players: usize) -> Board {
    let mut board = Board::new();
    board.populate_stations(players).unwrap();
    board
}

/// Place tiles one after another, marking legal squares for each.
fn lay_track(board: &mut Board, pool: &TilePool, tiles: &[(u8, usize, usize)]) {
    for &(id, x, y) in tiles {
        let tile = TileId::new(id);
        board.mark_legal_moves(pool.get_tile(tile).unwrap(), pool.num_unplayed_tiles());
        board.place_tile(x, y, tile).unwrap();
    }
}

// =============================================================================
// Live Scoring
// =============================================================================

#[test]
fn test_three_tiles_to_a_station() {
    let pool = TilePool::standard();
    let mut board = board_for(2);
    lay_track(&mut board, &pool, &[(2, 1, 1), (3, 1, 2), (8, 1, 3)]);

    // Down from station 0, then out to the left into station 29.
    let track = calculate_track_score(&board, &pool, StationId::new(0), None).unwrap();
    assert_eq!(track.score, 3);
    assert_eq!(track.segments, 3);
    assert_eq!(track.destination, Destination::Station);

    // Station 29's own train uses the other lane and is still open.
    assert_eq!(
        calculate_track_score(&board, &pool, StationId::new(29), None),
        Err(ScoreError::Incomplete(StationId::new(29)))
    );
}

#[test]
fn test_three_tiles_to_the_centre_score_double() {
    let pool = TilePool::standard();
    let mut board = board_for(2);
    lay_track(&mut board, &pool, &[(2, 4, 1), (3, 4, 2), (4, 4, 3)]);

    let track = calculate_track_score(&board, &pool, StationId::new(3), None).unwrap();
    assert_eq!(track.segments, 3);
    assert_eq!(track.score, 6);
    assert_eq!(track.destination, Destination::CentralStation);
}

#[test]
fn test_empty_first_square_is_incomplete() {
    let pool = TilePool::standard();
    let board = board_for(2);

    for station in StationId::all() {
        assert_eq!(
            calculate_track_score(&board, &pool, station, None),
            Err(ScoreError::Incomplete(station))
        );
        let eval = calculate_track_score(&board, &pool, station, Some(TileId::new(2))).unwrap();
        assert_eq!(eval.segments, 0);
        assert_eq!(eval.destination, Destination::Incomplete);
        assert!(!eval.passed_through);
    }
}

// =============================================================================
// Evaluation Mode
// =============================================================================

#[test]
fn test_evaluation_marks_pass_through() {
    let pool = TilePool::standard();
    let mut board = board_for(2);
    lay_track(&mut board, &pool, &[(2, 4, 1), (3, 4, 2)]);

    let through = calculate_track_score(&board, &pool, StationId::new(3), Some(TileId::new(3))).unwrap();
    assert!(through.passed_through);
    assert_eq!(through.score, 2);
    assert_eq!(through.destination, Destination::Incomplete);

    let elsewhere = calculate_track_score(&board, &pool, StationId::new(3), Some(TileId::new(9))).unwrap();
    assert!(!elsewhere.passed_through);
}

// =============================================================================
// Game Scoring
// =============================================================================

fn two_player_game() -> Game {
    let mut game = Game::new(21);
    game.init_players_from_ui(&GameSetup::new(2).with_player(1, PlayerSetup::human(1)))
        .unwrap();
    game
}

#[test]
fn test_completed_track_awards_owner() {
    let mut game = two_player_game();
    let pool = game.pool().clone();
    lay_track(game.board_mut(), &pool, &[(2, 1, 1), (3, 1, 2), (8, 1, 3)]);

    let completed = game.check_for_completed_tracks().unwrap();
    assert_eq!(completed, vec![StationId::new(0)]);

    // Station 0 belongs to player 2.
    let owner = &game.players()[PlayerId::new(1)];
    assert_eq!(owner.score, 3);
    assert_eq!(owner.stations_complete, 1);
    assert_eq!(game.players()[PlayerId::new(0)].score, 0);

    assert_eq!(game.board().train_at(StationId::new(0)), None);
    assert_eq!(game.board().track_status(StationId::new(0)), Some(TrackStatus::Processed));

    // Scored once only.
    assert!(game.check_for_completed_tracks().unwrap().is_empty());
    assert_eq!(game.players()[PlayerId::new(1)].score, 3);
}

#[test]
fn test_process_ignores_tracks_not_marked_complete() {
    let mut game = two_player_game();
    game.process_completed_track(StationId::new(5), 4).unwrap();

    assert_eq!(game.board().track_status(StationId::new(5)), Some(TrackStatus::NotComplete));
    assert!(game.board().train_at(StationId::new(5)).is_some());
    assert!(game.players().iter().all(|(_, p)| p.score == 0));
}

#[test]
fn test_played_tile_scores_through_the_state_machine() {
    let mut game = two_player_game();
    let pool = game.pool().clone();
    lay_track(game.board_mut(), &pool, &[(2, 1, 1), (3, 1, 2)]);

    // Player 1 finishes station 0's track for player 2.
    game.deal_tile(PlayerId::new(0), TileId::new(8)).unwrap();
    game.change_state(TurnState::SelectAction).unwrap();
    game.change_state(TurnState::TileSelect).unwrap();
    game.select_target(1, 3).unwrap();
    game.change_state(TurnState::TilePlay).unwrap();

    assert_eq!(game.players()[PlayerId::new(1)].score, 3);
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.result(), None);
}

#[test]
fn test_standings_follow_scores() {
    let mut game = two_player_game();
    let pool = game.pool().clone();
    lay_track(game.board_mut(), &pool, &[(2, 4, 1), (3, 4, 2), (4, 4, 3)]);
    game.check_for_completed_tracks().unwrap();

    // Station 3 belongs to player 1 in a two player game.
    let standings = game.standings();
    assert_eq!(standings[0].player, PlayerId::new(0));
    assert_eq!(standings[0].score, 6);
    assert_eq!(standings[1].score, 0);
    assert_eq!(
        GameResult::from_standings(&standings),
        Some(GameResult::Winner(PlayerId::new(0)))
    );

    // Not finished yet, so no official result.
    assert_eq!(game.result(), None);
}
