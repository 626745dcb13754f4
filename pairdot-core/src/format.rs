//! Plain-text rendering of dot plots, score matrices and alignments
//!
//! Layouts are fixed-width and deterministic so callers can display them
//! verbatim or compare them in tests. Trailing spaces are trimmed from every
//! grid line.

use crate::dot::DotPlotGrid;
use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringModel;
use crate::traceback::{AlignOp, AlignmentResult, TracebackPath};

/// Dot plot cell glyph for identical symbols
pub const MATCH_MARK: char = '*';
/// Score matrix suffix for cells on the traceback path
pub const PATH_MARK: char = '*';

const LABEL_BLANK: &str = "   | ";

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn row_label(symbol: char) -> String {
    format!("{:>2} | ", symbol)
}

/// Column header shared by the score and direction grids. The first matrix
/// column corresponds to the empty prefix and has no symbol.
fn grid_header(seq2: &[char], cell_width: usize) -> String {
    let mut line = " ".repeat(LABEL_BLANK.len() + cell_width);
    for &b in seq2 {
        line.push_str(&format!("{:>4}", b));
        line.push_str(&" ".repeat(cell_width - 4));
    }
    line
}

/// Render a dot plot with `*` at identical positions.
///
/// ```text
///       A G T
///  A |  *
///  C |
///  G |    *
///  T |      *
/// ```
pub fn dot_plot_to_string(seq1: &[char], seq2: &[char], grid: &DotPlotGrid) -> String {
    let mut out = String::new();

    let mut header = String::from("     ");
    for &b in seq2 {
        header.push_str(&format!("{:>2}", b));
    }
    push_line(&mut out, &header);

    for (i, &a) in seq1.iter().enumerate() {
        let mut line = row_label(a);
        for j in 0..seq2.len() {
            let glyph = if grid.get(i, j) { MATCH_MARK } else { ' ' };
            line.push_str(&format!("{:>2}", glyph));
        }
        push_line(&mut out, &line);
    }

    out
}

/// Render the score matrix. When `path` is given every cell gets a one
/// character suffix, `*` for cells on the path.
pub fn score_matrix_to_string(
    seq1: &[char],
    seq2: &[char],
    matrix: &ScoreMatrix,
    path: Option<&TracebackPath>,
) -> String {
    let cell_width = if path.is_some() { 5 } else { 4 };
    let mut out = String::new();

    push_line(&mut out, &grid_header(seq2, cell_width));
    push_line(
        &mut out,
        &"-".repeat(LABEL_BLANK.len() + cell_width * matrix.cols()),
    );

    for i in 0..matrix.rows() {
        let mut line = if i == 0 {
            LABEL_BLANK.to_string()
        } else {
            row_label(seq1[i - 1])
        };
        for (j, value) in matrix.row(i).iter().enumerate() {
            line.push_str(&format!("{:>4}", value));
            if let Some(path) = path {
                line.push(if path.contains(i, j) { PATH_MARK } else { ' ' });
            }
        }
        push_line(&mut out, &line);
    }

    out
}

/// Render the move a traceback would take out of every cell:
/// `\` diagonal, `|` up, `-` left, `?` when no candidate reproduces the cell.
pub fn direction_grid_to_string(
    seq1: &[char],
    seq2: &[char],
    matrix: &ScoreMatrix,
    scoring: &ScoringModel,
) -> String {
    let mut out = String::new();

    push_line(&mut out, &grid_header(seq2, 4));
    push_line(&mut out, &"-".repeat(LABEL_BLANK.len() + 4 * matrix.cols()));

    for i in 0..matrix.rows() {
        let mut line = if i == 0 {
            LABEL_BLANK.to_string()
        } else {
            row_label(seq1[i - 1])
        };
        for j in 0..matrix.cols() {
            let glyph = match matrix.direction(seq1, seq2, scoring, i, j) {
                Some(step) => step.arrow(),
                None if i == 0 && j == 0 => ' ',
                None => '?',
            };
            line.push_str(&format!("{:>4}", glyph));
        }
        push_line(&mut out, &line);
    }

    out
}

/// One line per interior cell listing the three recurrence candidates, the
/// stored value and the move chosen by the tie-break order.
pub fn steps_to_string(
    seq1: &[char],
    seq2: &[char],
    matrix: &ScoreMatrix,
    scoring: &ScoringModel,
) -> String {
    let mut out = String::new();

    for i in 1..matrix.rows() {
        for j in 1..matrix.cols() {
            let Some(candidates) = matrix.candidates(seq1, seq2, scoring, i, j) else {
                continue;
            };
            let value = matrix[(i, j)];
            let chosen = candidates
                .chosen_move(value)
                .map_or_else(|| "?".to_string(), |step| format!("{:?}", step));

            out.push_str(&format!(
                "({},{}) {}/{} diag={} up={} left={} -> {} [{}]\n",
                i,
                j,
                seq1[i - 1],
                seq2[j - 1],
                candidates.diagonal,
                candidates.up,
                candidates.left,
                value,
                chosen
            ));
        }
    }

    out
}

/// Score line, then the two aligned sequences around a midline with `|` for
/// identical columns, `.` for substitutions and a space for gaps.
pub fn alignment_to_string(result: &AlignmentResult) -> String {
    let midline: String = result
        .operations()
        .iter()
        .map(|op| match op {
            AlignOp::Match => '|',
            AlignOp::Mismatch => '.',
            AlignOp::Insertion | AlignOp::Deletion => ' ',
        })
        .collect();

    format!(
        "Score: {}\n\n{}\n{}\n{}\n",
        result.score(),
        result.aligned_seq1(),
        midline,
        result.aligned_seq2()
    )
}
