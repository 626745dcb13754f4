//! Command implementations for the pairdot CLI

pub mod align;
pub mod config;
pub mod dot;

use serde::Serialize;
use std::io::Write;

use crate::error::CliResult;
use crate::input::SequenceSource;
use crate::InputArgs;

/// Sequence sources for the two positional/file argument pairs
pub(crate) fn sources(input: &InputArgs) -> (SequenceSource, SequenceSource) {
    (
        SequenceSource::from_args(input.seq1.clone(), input.seq1_file.clone()),
        SequenceSource::from_args(input.seq2.clone(), input.seq2_file.clone()),
    )
}

pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
