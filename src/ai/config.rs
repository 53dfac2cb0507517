//! Weights of the move-evaluation heuristic.

use serde::{Deserialize, Serialize};

use crate::rules::Destination;

/// How much a track is worth to the computer player, by where it ends.
///
/// A candidate placement is valued by every track running through it:
/// `score × weight` is added for the player's own stations and subtracted
/// for everybody else's. Each track's product is truncated toward zero
/// before it is summed, so fractional weights lose their remainder per track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Track still open (default: 3.0).
    /// High because an open track can still grow.
    pub incomplete_track: f64,

    /// Track finished at a perimeter station (default: 1.0).
    pub complete_track: f64,

    /// Track finished at a central station (default: 2.0).
    /// Applied on top of the doubled score.
    pub central_station: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            incomplete_track: 3.0,
            complete_track: 1.0,
            central_station: 2.0,
        }
    }
}

impl EvalWeights {
    pub fn with_incomplete_track(mut self, weight: f64) -> Self {
        self.incomplete_track = weight;
        self
    }

    pub fn with_complete_track(mut self, weight: f64) -> Self {
        self.complete_track = weight;
        self
    }

    pub fn with_central_station(mut self, weight: f64) -> Self {
        self.central_station = weight;
        self
    }

    /// Weight for a track ending at `destination`.
    #[must_use]
    pub fn for_destination(&self, destination: Destination) -> f64 {
        match destination {
            Destination::Incomplete => self.incomplete_track,
            Destination::Station => self.complete_track,
            Destination::CentralStation => self.central_station,
        }
    }
}
