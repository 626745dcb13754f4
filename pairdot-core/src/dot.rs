//! Identity dot plots
//!
//! Marks every position pair where the two sequences carry the same symbol.
//! Comparison is exact and case-sensitive; callers normalise case beforehand.

use serde::Serialize;

/// Boolean identity grid of `len(seq1) x len(seq2)` cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DotPlotGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl DotPlotGrid {
    /// Number of rows (length of the first sequence)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (length of the second sequence)
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `seq1[i] == seq2[j]`. Out-of-range cells are never matches.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.cells[i * self.cols + j]
    }

    /// Cells of row `i`
    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Coordinates of all matching cells in row-major order
    pub fn matches(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &hit)| hit)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    pub fn match_count(&self) -> usize {
        self.cells.iter().filter(|&&hit| hit).count()
    }

    /// Summary statistics for the grid
    pub fn statistics(&self) -> DotPlotStatistics {
        let matches = self.match_count();
        let density = if self.cells.is_empty() {
            0.0
        } else {
            matches as f64 / self.cells.len() as f64
        };

        DotPlotStatistics {
            rows: self.rows,
            cols: self.cols,
            matches,
            density,
            longest_diagonal_run: self.longest_diagonal_run(),
        }
    }

    /// Longest run of consecutive matches along any `(i + k, j + k)` diagonal
    fn longest_diagonal_run(&self) -> usize {
        // prev[j] is the run length ending at (i - 1, j)
        let mut prev = vec![0usize; self.cols];
        let mut curr = vec![0usize; self.cols];
        let mut longest = 0;

        for i in 0..self.rows {
            for j in 0..self.cols {
                curr[j] = if self.get(i, j) {
                    if j > 0 { prev[j - 1] + 1 } else { 1 }
                } else {
                    0
                };
                longest = longest.max(curr[j]);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        longest
    }
}

/// Statistics about a dot plot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DotPlotStatistics {
    pub rows: usize,
    pub cols: usize,
    pub matches: usize,
    /// Fraction of cells that are matches
    pub density: f64,
    pub longest_diagonal_run: usize,
}

/// Builds identity dot plots
pub struct DotPlotEngine;

impl DotPlotEngine {
    /// Mark `(i, j)` iff `seq1[i] == seq2[j]`. Empty input yields an empty grid.
    pub fn build(seq1: &[char], seq2: &[char]) -> DotPlotGrid {
        let rows = seq1.len();
        let cols = seq2.len();

        let mut cells = Vec::with_capacity(rows * cols);
        for &a in seq1 {
            cells.extend(seq2.iter().map(|&b| a == b));
        }

        log::debug!("Built {}x{} dot plot", rows, cols);

        DotPlotGrid { rows, cols, cells }
    }
}
