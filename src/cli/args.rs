//! Command line argument parsing for the concord CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Concord - find word occurrences with their neighbors and dependency labels
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "Lemma-based concordance and word-dependency extraction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and show matches inline
    Analyze(AnalyzeArgs),

    /// Analyze text and write the report to a file
    Export(ExportArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The word to search for (lemma-based matching)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Text to analyze (alternatively use --file)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a UTF-8 file
    #[arg(short = 'F', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of neighbors to gather on each side of a match
    #[arg(short, long, default_value = "1")]
    pub window: usize,

    /// Include a highlighted rendering of the full token stream
    #[arg(long)]
    pub highlight: bool,
}

/// Arguments for the export command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// The word to search for (lemma-based matching)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Text to analyze (alternatively use --file)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a UTF-8 file
    #[arg(short = 'F', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of neighbors to gather on each side of a match
    #[arg(short, long, default_value = "1")]
    pub window: usize,

    /// Output file for the report
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
