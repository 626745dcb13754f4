//! Align command implementation - Needleman-Wunsch global alignment

use pairdot_core::format::{
    alignment_to_string, direction_grid_to_string, score_matrix_to_string, steps_to_string,
};
use pairdot_core::{compute_alignment_with, AlignmentResult, AlignmentStats, ScoringModel};
use serde::Serialize;
use std::io::Write;

use crate::config::{Config, OutputConfig, OutputFormat};
use crate::error::CliResult;
use crate::input::load_pair;
use crate::{InputArgs, OutputArgs, ScoringArgs};

#[derive(Debug, Serialize)]
struct AlignReport<'a> {
    seq1: &'a str,
    seq2: &'a str,
    scoring: ScoringModel,
    #[serde(flatten)]
    result: &'a AlignmentResult,
    stats: AlignmentStats,
    identity: f64,
    cigar: String,
}

pub fn execute(
    config: &Config,
    input: &InputArgs,
    scoring_args: &ScoringArgs,
    output_args: &OutputArgs,
) -> CliResult<()> {
    let scoring = resolve_scoring(config, scoring_args);
    let output = resolve_output(&config.output, output_args);

    let (first, second) = super::sources(input);
    let (seq1, seq2) = load_pair(&first, &second, &config.input)?;

    log::info!(
        "Aligning {} x {} symbols (match {}, mismatch {}, gap {})",
        seq1.len(),
        seq2.len(),
        scoring.match_score,
        scoring.mismatch,
        scoring.gap
    );
    let result = compute_alignment_with(&seq1, &seq2, &scoring);
    let stats = result.stats();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match output.format {
        OutputFormat::Json => {
            let report = AlignReport {
                seq1: &seq1.id,
                seq2: &seq2.id,
                scoring,
                result: &result,
                stats,
                identity: stats.identity(),
                cigar: result.cigar(),
            };
            super::write_json(&mut out, &report)?;
        }
        OutputFormat::Text => {
            let (s1, s2) = (seq1.symbols(), seq2.symbols());
            if output.show_matrix {
                let path = output.show_path.then(|| result.path());
                writeln!(out, "{}", score_matrix_to_string(&s1, &s2, result.matrix(), path))?;
            }
            if output.show_directions {
                writeln!(out, "{}", direction_grid_to_string(&s1, &s2, result.matrix(), &scoring))?;
            }
            if output.show_steps {
                writeln!(out, "{}", steps_to_string(&s1, &s2, result.matrix(), &scoring))?;
            }
            write!(out, "{}", alignment_to_string(&result))?;
            write!(out, "\n{}", stats_to_string(&result, &stats))?;
        }
    }

    Ok(())
}

/// Configuration file scores with command-line overrides applied
fn resolve_scoring(config: &Config, args: &ScoringArgs) -> ScoringModel {
    let file = config.scoring.to_model();
    ScoringModel::new(
        args.match_score.unwrap_or(file.match_score),
        args.mismatch.unwrap_or(file.mismatch),
        args.gap.unwrap_or(file.gap),
    )
}

fn resolve_output(config: &OutputConfig, args: &OutputArgs) -> OutputConfig {
    OutputConfig {
        format: args.format.unwrap_or(config.format),
        show_matrix: config.show_matrix && !args.no_matrix,
        show_path: config.show_path && !args.no_path,
        show_directions: config.show_directions || args.directions,
        show_steps: config.show_steps || args.steps,
    }
}

fn stats_to_string(result: &AlignmentResult, stats: &AlignmentStats) -> String {
    format!(
        "Length: {}  Matches: {}  Mismatches: {}  Gaps: {}  Identity: {:.1}%\nCIGAR: {}\n",
        stats.length,
        stats.matches,
        stats.mismatches,
        stats.gaps(),
        stats.identity() * 100.0,
        result.cigar()
    )
}
