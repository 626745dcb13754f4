use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod input;

use config::{Config, OutputFormat};
use error::{print_error_and_exit, CliError, CliResult};

#[derive(Parser)]
#[command(name = "pairdot")]
#[command(about = "pairdot - dot plots and global alignment of sequence pairs")]
#[command(version)]
#[command(long_about = "
pairdot compares two sequences: it draws an identity dot plot and computes a
Needleman-Wunsch global alignment with linear match/mismatch/gap scoring.

Examples:
  pairdot dot GATTACA GCATGCU --stats
  pairdot align GATTACA GCATGCU
  pairdot align --seq1-file a.fa --seq2-file b.fa --gap -2 --format json
  pairdot config --example > pairdot.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the identity dot plot of two sequences
    Dot {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (overrides the configuration file)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Append dot plot statistics
        #[arg(long)]
        stats: bool,
    },

    /// Globally align two sequences
    Align {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        scoring: ScoringArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show configuration
    Config {
        /// Print an example configuration file
        #[arg(long)]
        example: bool,

        /// Write the configuration to a TOML file instead of printing it
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// First sequence
    pub seq1: Option<String>,

    /// Second sequence
    pub seq2: Option<String>,

    /// Read the first sequence from a FASTA/FASTQ file
    #[arg(long)]
    pub seq1_file: Option<PathBuf>,

    /// Read the second sequence from a FASTA/FASTQ file
    #[arg(long)]
    pub seq2_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// Score for identical symbols
    #[arg(long = "match", allow_hyphen_values = true)]
    pub match_score: Option<i32>,

    /// Score for differing symbols
    #[arg(long, allow_hyphen_values = true)]
    pub mismatch: Option<i32>,

    /// Score for each gap position
    #[arg(long, allow_hyphen_values = true)]
    pub gap: Option<i32>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (overrides the configuration file)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Do not print the score matrix
    #[arg(long)]
    pub no_matrix: bool,

    /// Do not mark the traceback path in the matrix
    #[arg(long)]
    pub no_path: bool,

    /// Print the traceback direction of every cell
    #[arg(long)]
    pub directions: bool,

    /// Print the recurrence candidates of every cell
    #[arg(long)]
    pub steps: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    match cli.command {
        Commands::Dot { input, format, stats } => {
            commands::dot::execute(&config, &input, format, stats)
        }
        Commands::Align { input, scoring, output } => {
            commands::align::execute(&config, &input, &scoring, &output)
        }
        Commands::Config { example, save } => {
            commands::config::execute(&config, example, save.as_deref())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        print_error_and_exit(&err);
    }
}
