//! Final standings and game results.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Game result when the game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player finished on the same score.
    Draw,
    /// Several players share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// Decide the result from final standings.
    ///
    /// Only the score counts; completed stations do not break ties.
    ///
    /// ```
    /// use track_insanity::core::PlayerId;
    /// use track_insanity::rules::{GameResult, Standing};
    ///
    /// let standings = [
    ///     Standing { player: PlayerId::new(1), score: 14, stations_complete: 3 },
    ///     Standing { player: PlayerId::new(0), score: 9, stations_complete: 4 },
    /// ];
    /// assert_eq!(GameResult::from_standings(&standings), Some(GameResult::Winner(PlayerId::new(1))));
    /// ```
    #[must_use]
    pub fn from_standings(standings: &[Standing]) -> Option<Self> {
        let top = standings.iter().map(|s| s.score).max()?;
        let leaders: Vec<PlayerId> = standings
            .iter()
            .filter(|s| s.score == top)
            .map(|s| s.player)
            .collect();

        Some(match leaders.len() {
            1 => GameResult::Winner(leaders[0]),
            n if n == standings.len() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        })
    }
}

/// One line of the final score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: u32,
    pub stations_complete: u32,
}

/// Sort standings best first: score, then completed stations, then seat.
pub fn rank_standings(standings: &mut [Standing]) {
    standings.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.stations_complete.cmp(&a.stations_complete))
            .then(a.player.cmp(&b.player))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(player: u8, score: u32, stations_complete: u32) -> Standing {
        Standing {
            player: PlayerId::new(player),
            score,
            stations_complete,
        }
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(result.is_winner(PlayerId::new(2)));
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::Draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_shared_lead() {
        let standings = [standing(0, 10, 2), standing(1, 10, 3), standing(2, 4, 1)];
        assert_eq!(
            GameResult::from_standings(&standings),
            Some(GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)]))
        );
    }

    #[test]
    fn test_everyone_tied_is_draw() {
        let standings = [standing(0, 0, 0), standing(1, 0, 0)];
        assert_eq!(GameResult::from_standings(&standings), Some(GameResult::Draw));
        assert_eq!(GameResult::from_standings(&[]), None);
    }

    #[test]
    fn test_rank_standings() {
        let mut standings = [standing(0, 5, 1), standing(1, 9, 2), standing(2, 5, 3), standing(3, 5, 1)];
        rank_standings(&mut standings);

        let order: Vec<u8> = standings.iter().map(|s| s.player.0).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }
}
