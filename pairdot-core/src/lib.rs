//! pairdot core library
//!
//! Identity dot plots and Needleman-Wunsch global alignment with linear
//! match/mismatch/gap scoring for pairs of symbol sequences. Every `char` of
//! an input string is one symbol.
//!
//! ```
//! use pairdot_core::compute_alignment;
//!
//! let result = compute_alignment("GATTACA", "GCATGCU", None);
//! assert_eq!(result.score(), 0);
//! assert_eq!(result.aligned_seq1(), "G-ATTACA");
//! assert_eq!(result.aligned_seq2(), "GCA-TGCU");
//! ```

pub mod types;
pub mod scoring;
pub mod dot;
pub mod matrix;
pub mod traceback;
pub mod format;

// Re-export commonly used types and functions
pub use types::{Sequence, GAP_SYMBOL};
pub use scoring::ScoringModel;
pub use dot::{DotPlotEngine, DotPlotGrid, DotPlotStatistics};
pub use matrix::{AlignmentMatrixBuilder, CellCandidates, Move, ScoreMatrix};
pub use traceback::{AlignOp, AlignmentResult, AlignmentStats, TracebackEngine, TracebackPath};

/// Version information for the pairdot core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity dot plot of two sequences
pub fn compute_dot_plot(seq1: impl AsRef<str>, seq2: impl AsRef<str>) -> DotPlotGrid {
    DotPlotEngine::build(&symbols(seq1.as_ref()), &symbols(seq2.as_ref()))
}

/// Global alignment of two sequences, using default scoring (+1/-1/-1) when
/// `scoring` is `None`
pub fn compute_alignment(
    seq1: impl AsRef<str>,
    seq2: impl AsRef<str>,
    scoring: Option<&ScoringModel>,
) -> AlignmentResult {
    let scoring = scoring.copied().unwrap_or_default();
    compute_alignment_with(seq1, seq2, &scoring)
}

/// Global alignment of two sequences under `scoring`
pub fn compute_alignment_with(
    seq1: impl AsRef<str>,
    seq2: impl AsRef<str>,
    scoring: &ScoringModel,
) -> AlignmentResult {
    let (seq1, seq2) = (symbols(seq1.as_ref()), symbols(seq2.as_ref()));
    let matrix = AlignmentMatrixBuilder::build(&seq1, &seq2, scoring);
    TracebackEngine::traceback(&seq1, &seq2, matrix, scoring)
}

fn symbols(seq: &str) -> Vec<char> {
    seq.chars().collect()
}
