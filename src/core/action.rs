//! Move representation: what a player (or the computer) does on its turn.
//!
//! A `MovePacket` is the verb (`MoveKind`) plus whatever it needs:
//! - "Draw" and "End turn" carry nothing
//! - "Discard" names the held slot
//! - "Play" names the held slot and the target square

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Kind of move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Draw,
    Play,
    Discard,
    EndTurn,
}

impl MoveKind {
    /// Does this move finish the player's turn?
    #[must_use]
    pub fn ends_turn(self) -> bool {
        !matches!(self, MoveKind::Draw)
    }
}

/// Which of the two hand slots a tile is taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeldSlot {
    #[default]
    Primary,
    Reserve,
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use track_insanity::core::{HeldSlot, MoveKind, MovePacket};
///
/// let play = MovePacket::play(HeldSlot::Primary, 1, 3);
/// assert_eq!(play.kind, MoveKind::Play);
/// assert_eq!(play.target, Some((1, 3)));
///
/// assert!(MovePacket::draw().target.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovePacket {
    pub kind: MoveKind,
    /// Square to place on (Play only).
    pub target: Option<(usize, usize)>,
    /// Hand slot used (Play and Discard).
    pub slot: Option<HeldSlot>,
}

impl MovePacket {
    #[must_use]
    pub fn draw() -> Self {
        Self {
            kind: MoveKind::Draw,
            target: None,
            slot: None,
        }
    }

    #[must_use]
    pub fn end_turn() -> Self {
        Self {
            kind: MoveKind::EndTurn,
            target: None,
            slot: None,
        }
    }

    #[must_use]
    pub fn discard(slot: HeldSlot) -> Self {
        Self {
            kind: MoveKind::Discard,
            target: None,
            slot: Some(slot),
        }
    }

    #[must_use]
    pub fn play(slot: HeldSlot, x: usize, y: usize) -> Self {
        Self {
            kind: MoveKind::Play,
            target: Some((x, y)),
            slot: Some(slot),
        }
    }
}

/// A move applied to the live game, kept for history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub packet: MovePacket,
    /// Turn number when the move was applied (starts at 1).
    pub turn: u32,
}
