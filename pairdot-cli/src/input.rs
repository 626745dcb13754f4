//! Sequence input for the CLI
//!
//! Sequences come either from literal arguments or from the first record of a
//! FASTA/FASTQ file (plain or gzip-compressed) parsed with needletail.

use needletail::parse_fastx_file;
use pairdot_core::Sequence;
use std::path::{Path, PathBuf};

use crate::config::InputConfig;
use crate::error::{CliError, CliResult};

/// Where one of the two sequences is taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    Literal(String),
    File(PathBuf),
    Missing,
}

impl SequenceSource {
    /// A file path wins over a literal when both are given
    pub fn from_args(literal: Option<String>, file: Option<PathBuf>) -> Self {
        match (literal, file) {
            (_, Some(path)) => Self::File(path),
            (Some(text), None) => Self::Literal(text),
            (None, None) => Self::Missing,
        }
    }

    fn load(&self, label: &str) -> CliResult<Sequence> {
        match self {
            Self::Literal(text) => Ok(Sequence::new(label, text.as_str())),
            Self::File(path) => read_first_record(path),
            Self::Missing => Ok(Sequence::new(label, String::new())),
        }
    }
}

/// Read the first record of a FASTA/FASTQ file
pub fn read_first_record(path: &Path) -> CliResult<Sequence> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }
    if std::fs::metadata(path)?.len() == 0 {
        return Err(CliError::invalid_format(format!(
            "no sequence records found in {}",
            path.display()
        )));
    }

    let file_label = path.display().to_string();
    let mut reader =
        parse_fastx_file(path).map_err(|e| CliError::parse(file_label.as_str(), e.to_string()))?;

    let record = match reader.next() {
        Some(record) => record.map_err(|e| CliError::parse(file_label.as_str(), e.to_string()))?,
        None => {
            return Err(CliError::invalid_format(format!(
                "no sequence records found in {}",
                path.display()
            )))
        }
    };

    let id = String::from_utf8_lossy(record.id())
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let residues = String::from_utf8(record.seq().into_owned()).map_err(|_| {
        CliError::invalid_format(format!("sequence in {} is not valid UTF-8", path.display()))
    })?;
    let sequence = Sequence::new(id, residues);

    log::info!(
        "Read sequence '{}' ({} symbols) from {}",
        sequence.id,
        sequence.len(),
        path.display()
    );
    Ok(sequence)
}

/// Trim and optionally uppercase a sequence
pub fn normalize(sequence: &Sequence, config: &InputConfig) -> Sequence {
    if config.uppercase {
        sequence.normalized()
    } else {
        Sequence::new(sequence.id.clone(), sequence.residues.trim())
    }
}

/// Load, normalize and validate both sequences of a comparison
pub fn load_pair(
    first: &SequenceSource,
    second: &SequenceSource,
    config: &InputConfig,
) -> CliResult<(Sequence, Sequence)> {
    let seq1 = normalize(&first.load("seq1")?, config);
    let seq2 = normalize(&second.load("seq2")?, config);

    if seq1.is_empty() || seq2.is_empty() {
        return Err(CliError::validation("Both sequences must be provided."));
    }

    log::debug!("Comparing {} ({}) with {} ({})", seq1.id, seq1.len(), seq2.id, seq2.len());
    Ok((seq1, seq2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fasta(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_source_selection() {
        let path = PathBuf::from("a.fa");
        assert_eq!(
            SequenceSource::from_args(Some("ACGT".into()), Some(path.clone())),
            SequenceSource::File(path)
        );
        assert_eq!(
            SequenceSource::from_args(Some("ACGT".into()), None),
            SequenceSource::Literal("ACGT".into())
        );
        assert_eq!(SequenceSource::from_args(None, None), SequenceSource::Missing);
    }

    #[test]
    fn test_literal_pair_is_normalized() {
        let (seq1, seq2) = load_pair(
            &SequenceSource::Literal("  gattaca\n".into()),
            &SequenceSource::Literal("GcAtGcU".into()),
            &InputConfig::default(),
        )
        .unwrap();

        assert_eq!(seq1.as_str(), "GATTACA");
        assert_eq!(seq2.as_str(), "GCATGCU");
        assert_eq!(seq1.id, "seq1");
    }

    #[test]
    fn test_case_kept_when_uppercase_disabled() {
        let config = InputConfig { uppercase: false };
        let (seq1, _) = load_pair(
            &SequenceSource::Literal(" acGT ".into()),
            &SequenceSource::Literal("A".into()),
            &config,
        )
        .unwrap();
        assert_eq!(seq1.as_str(), "acGT");
    }

    #[test]
    fn test_non_ascii_literals_kept_whole() {
        let (seq1, seq2) = load_pair(
            &SequenceSource::Literal(" éa ".into()),
            &SequenceSource::Literal("Ж".into()),
            &InputConfig::default(),
        )
        .unwrap();
        assert_eq!(seq1.as_str(), "ÉA");
        assert_eq!(seq1.len(), 2);
        assert_eq!(seq2.len(), 1);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = load_pair(
            &SequenceSource::Literal("   ".into()),
            &SequenceSource::Literal("ACGT".into()),
            &InputConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Both sequences must be provided.");

        let err = load_pair(
            &SequenceSource::Literal("ACGT".into()),
            &SequenceSource::Missing,
            &InputConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }

    #[test]
    fn test_reads_first_fasta_record() {
        let file = fasta(">chr1 first record\nGATT\nACA\n>chr2\nTTTT\n");
        let sequence = read_first_record(file.path()).unwrap();
        assert_eq!(sequence.id, "chr1");
        assert_eq!(sequence.as_str(), "GATTACA");
    }

    #[test]
    fn test_reads_fastq_record() {
        let file = fasta("@read1\nACGT\n+\nIIII\n");
        let sequence = read_first_record(file.path()).unwrap();
        assert_eq!(sequence.id, "read1");
        assert_eq!(sequence.as_str(), "ACGT");
    }

    #[test]
    fn test_reads_utf8_record() {
        let file = fasta(">u
éA
");
        let sequence = read_first_record(file.path()).unwrap();
        assert_eq!(sequence.as_str(), "éA");
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_record() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b">bad\nAC\xffGT\n").unwrap();
        file.flush().unwrap();

        let err = read_first_record(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidFormat { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_first_record(Path::new("/nonexistent/pairdot/input.fa")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_file() {
        let file = fasta("");
        let err = read_first_record(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidFormat { .. }));
    }

    #[test]
    fn test_file_source_in_pair() {
        let file = fasta(">q\nacgt\n");
        let (seq1, seq2) = load_pair(
            &SequenceSource::File(file.path().to_path_buf()),
            &SequenceSource::Literal("AGT".into()),
            &InputConfig::default(),
        )
        .unwrap();
        assert_eq!(seq1.as_str(), "ACGT");
        assert_eq!(seq1.id, "q");
        assert_eq!(seq2.as_str(), "AGT");
    }
}
