//! Choosing a move from the ranked candidate list.
//!
//! Skill levels are selection policies: a hard computer always takes the
//! best candidate, weaker ones reach further down the list.

use super::eval::MoveEval;
use crate::core::SkillLevel;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for picking one candidate out of a ranked list.
pub trait SelectionPolicy {
    /// Index into `ranked` (best first), or `None` for an empty list.
    fn select(&self, ranked: &[MoveEval]) -> Option<usize>;
}

/// Fraction of the list a medium computer skips.
const MEDIUM_DEPTH: f64 = 0.33;

/// Fraction of the list an easy computer skips.
const EASY_DEPTH: f64 = 0.67;

impl SelectionPolicy for SkillLevel {
    fn select(&self, ranked: &[MoveEval]) -> Option<usize> {
        let n = ranked.len();
        if n == 0 {
            return None;
        }

        if n < 3 {
            return Some(match self {
                SkillLevel::Hard | SkillLevel::Medium => 0,
                SkillLevel::Easy => n - 1,
            });
        }

        let last = (n - 1) as f64;
        let index = match self {
            SkillLevel::Hard => 0,
            SkillLevel::Medium => {
                let mut index = (last * MEDIUM_DEPTH) as usize;
                // Don't throw away a gain for nothing.
                while index > 0 && ranked[index].value <= 0 {
                    index -= 1;
                }
                index
            }
            SkillLevel::Easy => (last * EASY_DEPTH) as usize,
        };
        Some(index)
    }
}

// =============================================================================
// Tests
// =============================================================================
