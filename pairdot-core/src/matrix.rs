//! Needleman-Wunsch score matrix
//!
//! The matrix has `(len1 + 1) x (len2 + 1)` cells. Row 0 and column 0 hold
//! cumulative gap penalties, so aligning against an empty prefix always costs
//! `gap * length` (no free end gaps). Every interior cell holds the best of its
//! diagonal, up and left candidates.

use crate::scoring::ScoringModel;
use serde::Serialize;
use std::ops::Index;

/// Direction of a traceback step out of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    /// `(i, j) -> (i - 1, j - 1)`: both symbols consumed
    Diagonal,
    /// `(i, j) -> (i - 1, j)`: `seq1[i - 1]` against a gap
    Up,
    /// `(i, j) -> (i, j - 1)`: a gap against `seq2[j - 1]`
    Left,
}

impl Move {
    /// Glyph used by the text direction grid
    pub fn arrow(self) -> char {
        match self {
            Move::Diagonal => '\\',
            Move::Up => '|',
            Move::Left => '-',
        }
    }
}

/// The three recurrence candidates for an interior cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCandidates {
    pub diagonal: i32,
    pub up: i32,
    pub left: i32,
}

impl CellCandidates {
    /// Value the recurrence assigns to the cell
    pub fn best(&self) -> i32 {
        self.diagonal.max(self.up).max(self.left)
    }

    /// Move whose candidate equals `value`, checked diagonal first, then up,
    /// then left. Several candidates may tie; this order decides which one wins.
    pub fn chosen_move(&self, value: i32) -> Option<Move> {
        if value == self.diagonal {
            Some(Move::Diagonal)
        } else if value == self.up {
            Some(Move::Up)
        } else if value == self.left {
            Some(Move::Left)
        } else {
            None
        }
    }
}

/// Filled dynamic programming matrix, row-major. Only
/// [`AlignmentMatrixBuilder`] constructs one, so `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl ScoreMatrix {
    /// `len(seq1) + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `len(seq2) + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy of the matrix as nested rows
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.data.chunks(self.cols).map(<[i32]>::to_vec).collect()
    }

    /// Value of the bottom-right cell, the global alignment score
    pub fn final_score(&self) -> i32 {
        self.data[self.data.len() - 1]
    }

    /// Recurrence candidates for `(i, j)`, or `None` on row 0 / column 0 or
    /// outside the matrix
    pub fn candidates(
        &self,
        seq1: &[char],
        seq2: &[char],
        scoring: &ScoringModel,
        i: usize,
        j: usize,
    ) -> Option<CellCandidates> {
        if i == 0 || j == 0 || i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.candidates_at(seq1[i - 1], seq2[j - 1], scoring, i, j))
    }

    /// Move a traceback takes out of `(i, j)`. Border cells have a forced move;
    /// the origin has none.
    pub fn direction(
        &self,
        seq1: &[char],
        seq2: &[char],
        scoring: &ScoringModel,
        i: usize,
        j: usize,
    ) -> Option<Move> {
        match (i, j) {
            (0, 0) => None,
            (0, _) => Some(Move::Left),
            (_, 0) => Some(Move::Up),
            _ => {
                let value = self.get(i, j)?;
                self.candidates(seq1, seq2, scoring, i, j)?
                    .chosen_move(value)
            }
        }
    }

    #[inline]
    fn candidates_at(
        &self,
        a: char,
        b: char,
        scoring: &ScoringModel,
        i: usize,
        j: usize,
    ) -> CellCandidates {
        let cols = self.cols;
        CellCandidates {
            diagonal: self.data[(i - 1) * cols + (j - 1)]
                .saturating_add(scoring.substitution_score(a, b)),
            up: self.data[(i - 1) * cols + j].saturating_add(scoring.gap()),
            left: self.data[i * cols + (j - 1)].saturating_add(scoring.gap()),
        }
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) outside {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

/// Fills Needleman-Wunsch score matrices
pub struct AlignmentMatrixBuilder;

impl AlignmentMatrixBuilder {
    /// Build the full `(len1 + 1) x (len2 + 1)` matrix.
    ///
    /// Time and memory are both O(len1 * len2).
    pub fn build(seq1: &[char], seq2: &[char], scoring: &ScoringModel) -> ScoreMatrix {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;

        log::debug!(
            "Filling {}x{} score matrix ({} cells)",
            rows,
            cols,
            rows * cols
        );

        let mut matrix = ScoreMatrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        };

        for i in 0..rows {
            matrix.data[i * cols] = scoring.gap_run(i);
        }
        for j in 0..cols {
            matrix.data[j] = scoring.gap_run(j);
        }

        for i in 1..rows {
            let a = seq1[i - 1];
            for j in 1..cols {
                let best = matrix.candidates_at(a, seq2[j - 1], scoring, i, j).best();
                matrix.data[i * cols + j] = best;
            }
        }

        matrix
    }
}
