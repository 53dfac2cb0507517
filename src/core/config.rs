//! Game configuration handed over by the presentation layer.
//!
//! The UI collects its selections into a `GameSetup`:
//! - `PlayerSetup`: who sits in each seat (human or computer) and their avatar
//! - `SkillLevel`: how strong computer players are
//! - `GameOptions`: display and sound options carried along for the UI
//!
//! The engine reads the setup once in `Game::init_players_from_ui`.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{ControlKind, MAX_PLAYERS, MIN_PLAYERS};

/// Highest selectable volume step.
pub const MAX_VOLUME: u8 = 9;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Whose last move the UI highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LastMoveHighlight {
    None,
    LastPlayer,
    #[default]
    AllPlayers,
}

/// Display and sound options. The engine stores but does not interpret them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub highlight_tracks: bool,
    pub highlight_legal_moves: bool,
    pub show_last_move: LastMoveHighlight,
    pub music_volume: u8,
    pub effects_volume: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            highlight_tracks: true,
            highlight_legal_moves: true,
            show_last_move: LastMoveHighlight::AllPlayers,
            music_volume: 4,
            effects_volume: 4,
        }
    }
}

/// One seat in the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub control: ControlKind,
    #[serde(default)]
    pub avatar_id: u8,
}

impl PlayerSetup {
    #[must_use]
    pub fn human(avatar_id: u8) -> Self {
        Self {
            control: ControlKind::Human,
            avatar_id,
        }
    }

    #[must_use]
    pub fn computer(avatar_id: u8) -> Self {
        Self {
            control: ControlKind::Computer,
            avatar_id,
        }
    }
}

/// Complete new-game configuration.
///
/// ## Example
///
/// ```
/// use track_insanity::core::{GameSetup, PlayerSetup, SkillLevel};
///
/// let setup = GameSetup::new(3)
///     .with_player(0, PlayerSetup::human(2))
///     .with_skill(SkillLevel::Hard);
///
/// assert!(setup.validate().is_ok());
/// assert_eq!(setup.players.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// Number of seats in play (2-6).
    pub player_count: usize,

    /// Seat configuration. Only the first `player_count` entries are used.
    pub players: Vec<PlayerSetup>,

    /// Skill level shared by all computer players.
    #[serde(default)]
    pub ai_skill: SkillLevel,

    #[serde(default)]
    pub options: GameOptions,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}

impl GameSetup {
    /// Seat 0 is human, every other seat is a computer.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let players = (0..MAX_PLAYERS)
            .map(|i| {
                if i == 0 {
                    PlayerSetup::human(i as u8)
                } else {
                    PlayerSetup::computer(i as u8)
                }
            })
            .collect();

        Self {
            player_count,
            players,
            ai_skill: SkillLevel::default(),
            options: GameOptions::default(),
        }
    }

    /// Replace one seat's configuration.
    #[must_use]
    pub fn with_player(mut self, seat: usize, player: PlayerSetup) -> Self {
        if seat < self.players.len() {
            self.players[seat] = player;
        }
        self
    }

    /// Set every seat in play to computer control.
    #[must_use]
    pub fn all_computers(mut self) -> Self {
        for player in &mut self.players {
            player.control = ControlKind::Computer;
        }
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.ai_skill = skill;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the setup before a game is built from it.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        if self.players.len() < self.player_count {
            return Err(GameError::MissingPlayerSetup {
                requested: self.player_count,
                listed: self.players.len(),
            });
        }
        if let Some(seat) = self.players[..self.player_count]
            .iter()
            .position(|p| p.control == ControlKind::Nobody)
        {
            return Err(GameError::UncontrolledSeat(seat));
        }
        for volume in [self.options.music_volume, self.options.effects_volume] {
            if volume > MAX_VOLUME {
                return Err(GameError::InvalidVolume(volume));
            }
        }
        Ok(())
    }
}
