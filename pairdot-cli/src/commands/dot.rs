//! Dot command implementation - identity dot plot of two sequences

use pairdot_core::format::dot_plot_to_string;
use pairdot_core::{compute_dot_plot, DotPlotGrid, DotPlotStatistics};
use serde::Serialize;
use std::io::Write;

use crate::config::{Config, OutputFormat};
use crate::error::CliResult;
use crate::input::load_pair;
use crate::InputArgs;

#[derive(Debug, Serialize)]
struct DotReport<'a> {
    seq1: &'a str,
    seq2: &'a str,
    rows: usize,
    cols: usize,
    grid: Vec<Vec<bool>>,
    statistics: DotPlotStatistics,
}

pub fn execute(
    config: &Config,
    input: &InputArgs,
    format: Option<OutputFormat>,
    stats: bool,
) -> CliResult<()> {
    let (first, second) = super::sources(input);
    let (seq1, seq2) = load_pair(&first, &second, &config.input)?;

    let grid = compute_dot_plot(&seq1, &seq2);
    log::info!("Dot plot has {} matching cells", grid.match_count());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let report = DotReport {
                seq1: &seq1.id,
                seq2: &seq2.id,
                rows: grid.rows(),
                cols: grid.cols(),
                grid: (0..grid.rows()).map(|i| grid.row(i).to_vec()).collect(),
                statistics: grid.statistics(),
            };
            super::write_json(&mut out, &report)?;
        }
        OutputFormat::Text => {
            write!(out, "{}", dot_plot_to_string(&seq1.symbols(), &seq2.symbols(), &grid))?;
            if stats {
                write!(out, "\n{}", statistics_to_string(&grid))?;
            }
        }
    }

    Ok(())
}

fn statistics_to_string(grid: &DotPlotGrid) -> String {
    let stats = grid.statistics();
    format!(
        "Matches: {}/{} ({:.1}%)\nLongest diagonal run: {}\n",
        stats.matches,
        stats.rows * stats.cols,
        stats.density * 100.0,
        stats.longest_diagonal_run
    )
}
