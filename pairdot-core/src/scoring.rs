//! Linear scoring model for global alignment
//!
//! A single match score, mismatch score and gap penalty applied uniformly to
//! every position. There is no gap-open/gap-extend distinction.

use serde::{Deserialize, Serialize};

/// Default score for identical symbols
pub const DEFAULT_MATCH: i32 = 1;
/// Default score for differing symbols
pub const DEFAULT_MISMATCH: i32 = -1;
/// Default penalty for aligning a symbol against a gap
pub const DEFAULT_GAP: i32 = -1;

/// Match, mismatch and gap scores used by the alignment matrix and traceback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringModel {
    /// Score added when two aligned symbols are identical
    pub match_score: i32,
    /// Score added when two aligned symbols differ
    pub mismatch: i32,
    /// Score added for every symbol aligned against a gap
    pub gap: i32,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoringModel {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Score for aligning `a` against `b`
    #[inline]
    pub fn substitution_score(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Linear gap penalty
    #[inline]
    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Cost of aligning `len` symbols entirely against gaps, saturating at the
    /// `i32` bounds
    pub fn gap_run(&self, len: usize) -> i32 {
        i32::try_from(len)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.gap)
    }
}
