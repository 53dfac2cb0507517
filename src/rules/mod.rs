//! Scoring rules: track tracing and final results.

pub mod result;
pub mod scoring;

pub use result::{rank_standings, GameResult, Standing};
pub use scoring::{calculate_track_score, Destination, TrackScore, SEGMENT_LIMIT};
