//! Traceback over a filled score matrix
//!
//! Walks from the bottom-right cell to the origin and reconstructs one optimal
//! global alignment. Where several moves reproduce a cell's value the diagonal
//! move wins, then up, then left, so the output is deterministic.

use crate::matrix::{Move, ScoreMatrix};
use crate::scoring::ScoringModel;
use crate::types::GAP_SYMBOL;
use serde::Serialize;

/// Edit operation for one alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignOp {
    /// Identical symbols
    Match,
    /// Differing symbols
    Mismatch,
    /// Gap in the first sequence, symbol only in the second
    Insertion,
    /// Gap in the second sequence, symbol only in the first
    Deletion,
}

impl AlignOp {
    /// Extended CIGAR code, treating the first sequence as the reference
    pub fn cigar_char(self) -> char {
        match self {
            AlignOp::Match => '=',
            AlignOp::Mismatch => 'X',
            AlignOp::Insertion => 'I',
            AlignOp::Deletion => 'D',
        }
    }
}

/// Matrix cells visited by a traceback, from `(len1, len2)` back to `(0, 0)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TracebackPath {
    cells: Vec<(usize, usize)>,
    /// Visited column range per row. The walk never moves right or down, so the
    /// cells visited in one row are contiguous.
    #[serde(skip)]
    row_spans: Vec<(usize, usize)>,
}

impl TracebackPath {
    pub(crate) fn from_cells(cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|&(i, _)| i + 1).max().unwrap_or(0);
        let mut row_spans = vec![(usize::MAX, 0); rows];

        for &(i, j) in &cells {
            let span = &mut row_spans[i];
            span.0 = span.0.min(j);
            span.1 = span.1.max(j);
        }

        Self { cells, row_spans }
    }

    /// Visited cells in walk order (end cell first, origin last)
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(i, j)` lies on the path
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.row_spans
            .get(i)
            .map_or(false, |&(lo, hi)| lo <= j && j <= hi)
    }
}

/// Column counts for an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// Number of alignment columns
    pub length: usize,
}

impl AlignmentStats {
    fn from_ops(ops: &[AlignOp]) -> Self {
        let mut stats = Self {
            length: ops.len(),
            ..Default::default()
        };
        for op in ops {
            match op {
                AlignOp::Match => stats.matches += 1,
                AlignOp::Mismatch => stats.mismatches += 1,
                AlignOp::Insertion => stats.insertions += 1,
                AlignOp::Deletion => stats.deletions += 1,
            }
        }
        stats
    }

    /// Fraction of columns holding identical symbols, 0.0 for an empty alignment
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.matches as f64 / self.length as f64
        }
    }

    pub fn gaps(&self) -> usize {
        self.insertions + self.deletions
    }
}

/// One optimal global alignment together with the matrix it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    aligned_seq1: String,
    aligned_seq2: String,
    score: i32,
    matrix: ScoreMatrix,
    path: TracebackPath,
    #[serde(skip)]
    ops: Vec<AlignOp>,
}

impl AlignmentResult {
    /// First sequence with gap symbols inserted
    pub fn aligned_seq1(&self) -> &str {
        &self.aligned_seq1
    }

    /// Second sequence with gap symbols inserted
    pub fn aligned_seq2(&self) -> &str {
        &self.aligned_seq2
    }

    /// Global alignment score, the bottom-right matrix cell
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    pub fn path(&self) -> &TracebackPath {
        &self.path
    }

    /// Alignment columns in forward order
    pub fn operations(&self) -> &[AlignOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn stats(&self) -> AlignmentStats {
        AlignmentStats::from_ops(&self.ops)
    }

    /// Score obtained by summing the columns under `scoring`
    pub fn path_score(&self, scoring: &ScoringModel) -> i32 {
        self.ops
            .iter()
            .map(|op| match op {
                AlignOp::Match => scoring.match_score,
                AlignOp::Mismatch => scoring.mismatch,
                AlignOp::Insertion | AlignOp::Deletion => scoring.gap(),
            })
            .fold(0i32, i32::saturating_add)
    }

    /// Run-length extended CIGAR string, e.g. `1=1I1=1D4X`
    pub fn cigar(&self) -> String {
        let mut cigar = String::new();
        let mut runs = self.ops.iter().peekable();

        while let Some(&op) = runs.next() {
            let mut count = 1;
            while runs.peek() == Some(&&op) {
                runs.next();
                count += 1;
            }
            cigar.push_str(&count.to_string());
            cigar.push(op.cigar_char());
        }

        cigar
    }
}

/// Reconstructs alignments from filled score matrices
pub struct TracebackEngine;

impl TracebackEngine {
    /// Walk `matrix` from `(len1, len2)` to `(0, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` does not have `(len1 + 1) x (len2 + 1)` cells.
    pub fn traceback(
        seq1: &[char],
        seq2: &[char],
        matrix: ScoreMatrix,
        scoring: &ScoringModel,
    ) -> AlignmentResult {
        assert_eq!(
            (matrix.rows(), matrix.cols()),
            (seq1.len() + 1, seq2.len() + 1),
            "score matrix dimensions do not match the sequences"
        );

        let (mut i, mut j) = (seq1.len(), seq2.len());
        let mut cells = Vec::with_capacity(i + j + 1);
        let mut rev1 = Vec::with_capacity(i + j);
        let mut rev2 = Vec::with_capacity(i + j);
        let mut ops = Vec::with_capacity(i + j);

        cells.push((i, j));

        while i > 0 || j > 0 {
            let step = matrix
                .direction(seq1, seq2, scoring, i, j)
                .unwrap_or_else(|| {
                    log::warn!(
                        "Cell ({}, {}) does not satisfy the recurrence, consuming seq1",
                        i,
                        j
                    );
                    Move::Up
                });

            match step {
                Move::Diagonal => {
                    let (a, b) = (seq1[i - 1], seq2[j - 1]);
                    rev1.push(a);
                    rev2.push(b);
                    ops.push(if a == b { AlignOp::Match } else { AlignOp::Mismatch });
                    i -= 1;
                    j -= 1;
                }
                Move::Up => {
                    rev1.push(seq1[i - 1]);
                    rev2.push(GAP_SYMBOL);
                    ops.push(AlignOp::Deletion);
                    i -= 1;
                }
                Move::Left => {
                    rev1.push(GAP_SYMBOL);
                    rev2.push(seq2[j - 1]);
                    ops.push(AlignOp::Insertion);
                    j -= 1;
                }
            }

            log::trace!("Traceback {:?} -> ({}, {})", step, i, j);
            cells.push((i, j));
        }

        ops.reverse();

        let score = matrix.final_score();
        log::debug!(
            "Traceback finished: {} columns, score {}",
            ops.len(),
            score
        );

        AlignmentResult {
            aligned_seq1: rev1.into_iter().rev().collect(),
            aligned_seq2: rev2.into_iter().rev().collect(),
            score,
            matrix,
            path: TracebackPath::from_cells(cells),
            ops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::AlignmentMatrixBuilder;

    fn symbols(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn align(seq1: &str, seq2: &str, scoring: &ScoringModel) -> AlignmentResult {
        let (seq1, seq2) = (symbols(seq1), symbols(seq2));
        let matrix = AlignmentMatrixBuilder::build(&seq1, &seq2, scoring);
        TracebackEngine::traceback(&seq1, &seq2, matrix, scoring)
    }

    #[test]
    fn test_gattaca_alignment() {
        let result = align("GATTACA", "GCATGCU", &ScoringModel::default());

        assert_eq!(result.aligned_seq1(), "G-ATTACA");
        assert_eq!(result.aligned_seq2(), "GCA-TGCU");
        assert_eq!(result.score(), 0);
        assert_eq!(
            result.path().cells(),
            &[(7, 7), (6, 6), (5, 5), (4, 4), (3, 3), (2, 3), (1, 2), (1, 1), (0, 0)]
        );
        assert_eq!(result.cigar(), "1=1I1=1D1=1X1=1X");
    }

    #[test]
    fn test_up_preferred_over_left() {
        // At (2, 2) up and left both reproduce -1 and the diagonal does not
        let result = align("AC", "CA", &ScoringModel::default());
        assert_eq!(result.aligned_seq1(), "-AC");
        assert_eq!(result.aligned_seq2(), "CA-");
        assert_eq!(result.score(), -1);
        assert_eq!(result.path().cells(), &[(2, 2), (1, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_leading_gap_forced_on_border() {
        let result = align("AT", "T", &ScoringModel::default());
        assert_eq!(result.aligned_seq1(), "AT");
        assert_eq!(result.aligned_seq2(), "-T");
        assert_eq!(result.score(), 0);
        assert_eq!(result.path().cells(), &[(2, 1), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_custom_scoring() {
        let result = align("GATTACA", "GCATGCU", &ScoringModel::new(2, -1, -2));
        assert_eq!(result.aligned_seq1(), "GATTACA");
        assert_eq!(result.aligned_seq2(), "GCATGCU");
        assert_eq!(result.score(), 2);
    }

    #[test]
    fn test_gap_in_second_sequence() {
        let result = align("ACGT", "AGT", &ScoringModel::default());
        assert_eq!(result.aligned_seq1(), "ACGT");
        assert_eq!(result.aligned_seq2(), "A-GT");
        assert_eq!(result.score(), 2);
        assert_eq!(result.operations()[1], AlignOp::Deletion);
    }

    #[test]
    fn test_empty_inputs() {
        let scoring = ScoringModel::default();

        let result = align("", "", &scoring);
        assert!(result.is_empty());
        assert_eq!(result.score(), 0);
        assert_eq!(result.path().cells(), &[(0, 0)]);
        assert_eq!(result.cigar(), "");

        let result = align("", "ACGT", &scoring);
        assert_eq!(result.aligned_seq1(), "----");
        assert_eq!(result.aligned_seq2(), "ACGT");
        assert_eq!(result.score(), -4);
        assert_eq!(result.path().cells(), &[(0, 4), (0, 3), (0, 2), (0, 1), (0, 0)]);

        let result = align("ACGT", "", &scoring);
        assert_eq!(result.aligned_seq1(), "ACGT");
        assert_eq!(result.aligned_seq2(), "----");
        assert_eq!(result.score(), -4);
        assert_eq!(result.cigar(), "4D");
    }

    #[test]
    fn test_path_contains() {
        let result = align("GATTACA", "GCATGCU", &ScoringModel::default());
        let path = result.path();

        assert!(path.contains(7, 7));
        assert!(path.contains(0, 0));
        // Row 1 is visited at columns 1 and 2
        assert!(path.contains(1, 1));
        assert!(path.contains(1, 2));
        assert!(!path.contains(1, 3));
        assert!(path.contains(2, 3));
        assert!(!path.contains(2, 2));
        assert!(!path.contains(8, 0));

        let visited = (0..8)
            .flat_map(|i| (0..8).map(move |j| (i, j)))
            .filter(|&(i, j)| path.contains(i, j))
            .count();
        assert_eq!(visited, path.len());
    }

    #[test]
    fn test_stats_and_path_score() {
        let scoring = ScoringModel::default();
        let result = align("GATTACA", "GCATGCU", &scoring);
        let stats = result.stats();

        assert_eq!(stats.length, 8);
        assert_eq!(stats.matches, 4);
        assert_eq!(stats.mismatches, 2);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.deletions, 1);
        assert_eq!(stats.gaps(), 2);
        assert!((stats.identity() - 0.5).abs() < 1e-12);
        assert_eq!(result.path_score(&scoring), result.score());
    }

    #[test]
    fn test_multibyte_symbols_stay_whole() {
        let scoring = ScoringModel::default();

        let result = align("éA", "A", &scoring);
        assert_eq!(result.aligned_seq1(), "éA");
        assert_eq!(result.aligned_seq2(), "-A");
        assert_eq!(result.aligned_seq1().chars().count(), result.aligned_seq2().chars().count());
        assert_eq!(result.score(), 0);

        let result = align("é", "è", &scoring);
        assert_eq!(result.score(), -1);
        assert_eq!(result.cigar(), "1X");
    }

    #[test]
    fn test_extreme_scores_saturate() {
        let scoring = ScoringModel::new(1, -1, i32::MIN);
        let result = align("AC", "A", &scoring);

        assert_eq!(result.aligned_seq1(), "AC");
        assert_eq!(result.aligned_seq2(), "A-");
        assert_eq!(result.score(), i32::MIN + 1);
        assert_eq!(result.path_score(&scoring), result.score());
    }

    #[test]
    fn test_empty_identity() {
        assert_eq!(AlignmentStats::default().identity(), 0.0);
    }

    #[test]
    fn test_fallback_on_inconsistent_matrix() {
        // A matrix built under different scoring does not satisfy the recurrence
        // for the scoring used in the walk; the walk must still terminate.
        let (seq1, seq2) = (symbols("ACGTAC"), symbols("TTACG"));
        let matrix = AlignmentMatrixBuilder::build(&seq1, &seq2, &ScoringModel::new(5, -4, -7));
        let result = TracebackEngine::traceback(&seq1, &seq2, matrix, &ScoringModel::default());

        let strip = |s: &str| s.chars().filter(|&c| c != GAP_SYMBOL).collect::<String>();
        assert_eq!(strip(result.aligned_seq1()), "ACGTAC");
        assert_eq!(strip(result.aligned_seq2()), "TTACG");
        assert_eq!(result.path().cells().last(), Some(&(0, 0)));
    }

    #[test]
    #[should_panic(expected = "dimensions do not match")]
    fn test_mismatched_matrix_panics() {
        let scoring = ScoringModel::default();
        let matrix = AlignmentMatrixBuilder::build(&symbols("AC"), &symbols("AC"), &scoring);
        TracebackEngine::traceback(&symbols("ACG"), &symbols("AC"), matrix, &scoring);
    }
}
