//! Error handling for the pairdot CLI

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user by `pairdot`
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Could not parse sequence file {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Could not write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat { message: message.into() }
    }

    pub fn parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("cannot render configuration as TOML: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Error message followed by hints for fixing the invocation
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let hints: Vec<String> = match error {
        CliError::FileNotFound { path } => vec![
            format!("Check that the file path is correct: {}", path.display()),
            "Ensure you have read permissions for the file".into(),
        ],
        CliError::InvalidFormat { .. } | CliError::Parse { .. } => vec![
            "Sequence files must be FASTA or FASTQ (optionally gzip-compressed)".into(),
            "Only the first record of each file is used".into(),
        ],
        CliError::Config { .. } => vec![
            "Check your pairdot.toml configuration file".into(),
            "Use 'pairdot config --example' to generate a sample configuration".into(),
        ],
        CliError::Validation { .. } => vec![
            "Pass two sequences as arguments, e.g. 'pairdot align GATTACA GCATGCU'".into(),
            "Or read them with --seq1-file and --seq2-file".into(),
        ],
        CliError::Io { .. } | CliError::Json(_) => Vec::new(),
    };

    let mut message = error.to_string();
    if !hints.is_empty() {
        message.push_str("\n\nSuggestions:");
        for hint in hints {
            message.push_str("\n  • ");
            message.push_str(&hint);
        }
    }
    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
