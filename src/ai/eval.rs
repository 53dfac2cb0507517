//! Candidate move evaluation.
//!
//! For every legal square the candidate tile is placed on the scratch
//! board and every track that still has a train is traced with the tile as
//! pass-through. Tracks running through the tile count for the player when
//! they start at one of its stations and against it otherwise.

use serde::{Deserialize, Serialize};

use super::config::EvalWeights;
use crate::board::{station_owner, Board, StationId, BOARD_HEIGHT, BOARD_WIDTH};
use crate::core::{GameError, HeldSlot, PlayerId};
use crate::rules::calculate_track_score;
use crate::tiles::{TileId, TilePool};

/// Value of placing a held tile on one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEval {
    pub slot: HeldSlot,
    pub x: usize,
    pub y: usize,
    pub value: i32,
}

/// Evaluate `tile` on every square currently marked legal.
///
/// The board's legality mask must already be marked for `tile`. Each
/// candidate is removed again before the next one is tried, so the board
/// ends up as it started.
#[allow(clippy::too_many_arguments)]
pub fn analyze_moves(
    board: &mut Board,
    pool: &TilePool,
    tile: TileId,
    slot: HeldSlot,
    player: PlayerId,
    player_count: usize,
    weights: &EvalWeights,
) -> Result<Vec<MoveEval>, GameError> {
    let mut evals = Vec::new();

    for x in 1..BOARD_WIDTH - 1 {
        for y in 1..BOARD_HEIGHT - 1 {
            if !board.is_legal_move(x, y) {
                continue;
            }
            board.place_tile(x, y, tile)?;
            let value = value_of_placement(board, pool, tile, player, player_count, weights);
            board.remove_tile(x, y)?;

            evals.push(MoveEval {
                slot,
                x,
                y,
                value: value?,
            });
        }
    }
    Ok(evals)
}

fn value_of_placement(
    board: &Board,
    pool: &TilePool,
    tile: TileId,
    player: PlayerId,
    player_count: usize,
    weights: &EvalWeights,
) -> Result<i32, GameError> {
    let mut value = 0;
    for station in StationId::all() {
        if board.train_at(station).is_none() {
            continue;
        }
        let track = calculate_track_score(board, pool, station, Some(tile))?;
        if !track.passed_through {
            continue;
        }

        let worth = (f64::from(track.score) * weights.for_destination(track.destination)) as i32;
        if station_owner(player_count, station)? == Some(player) {
            value += worth;
        } else {
            value -= worth;
        }
    }
    Ok(value)
}

/// Sort best first. Equal values keep their evaluation order.
pub fn rank(evals: &mut [MoveEval]) {
    evals.sort_by(|a, b| b.value.cmp(&a.value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_board() -> Board {
        let mut board = Board::new();
        board.populate_stations(2).unwrap();
        board
    }

    #[test]
    fn test_one_candidate_per_legal_square() {
        let pool = TilePool::standard();
        let mut board = fresh_board();
        let tile = TileId::new(2);
        let legal = board.mark_legal_moves(pool.get_tile(tile).unwrap(), 60);
        let before = board.clone();

        let evals = analyze_moves(
            &mut board,
            &pool,
            tile,
            HeldSlot::Primary,
            PlayerId::new(0),
            2,
            &EvalWeights::default(),
        )
        .unwrap();

        assert_eq!(evals.len(), legal);
        assert_eq!(board, before);
        // Column-major order: (1, 1) first, then down the first column.
        assert_eq!((evals[0].x, evals[0].y), (1, 1));
        assert_eq!((evals[1].x, evals[1].y), (1, 2));
    }

    #[test]
    fn test_straight_at_corner_values() {
        let pool = TilePool::standard();
        let mut board = fresh_board();
        let tile = TileId::new(2);
        board.mark_legal_moves(pool.get_tile(tile).unwrap(), 60);

        let evals = analyze_moves(
            &mut board,
            &pool,
            tile,
            HeldSlot::Primary,
            PlayerId::new(0),
            2,
            &EvalWeights::default(),
        )
        .unwrap();

        // At (1, 1) the straight tile carries two open one-tile tracks:
        // station 0 (player 2) down and station 31 (player 1) across.
        // Each is worth 1 × 3.0, so they cancel out.
        let corner = evals.iter().find(|e| (e.x, e.y) == (1, 1)).unwrap();
        assert_eq!(corner.value, 0);
    }

    #[test]
    fn test_rank_is_stable() {
        let mut evals = vec![
            MoveEval { slot: HeldSlot::Primary, x: 1, y: 1, value: 0 },
            MoveEval { slot: HeldSlot::Primary, x: 1, y: 2, value: 6 },
            MoveEval { slot: HeldSlot::Reserve, x: 1, y: 3, value: 0 },
            MoveEval { slot: HeldSlot::Reserve, x: 1, y: 4, value: -3 },
        ];
        rank(&mut evals);

        let order: Vec<usize> = evals.iter().map(|e| e.y).collect();
        assert_eq!(order, vec![2, 1, 3, 4]);
    }
}
