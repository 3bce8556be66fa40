//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordArgs, OutputFormat};
use crate::concordance::extractor::MatchResult;
use crate::concordance::report::format_match;
use crate::error::Result;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub query: String,
    pub window: usize,
    pub total_matches: usize,
    pub matches: Vec<MatchResult>,
    pub highlighted: Option<String>,
}

/// Result structure for the export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResults {
    pub path: String,
    pub matches_written: usize,
}

/// Human rendering for a command result.
pub trait Render: Serialize {
    fn render_human(&self, args: &ConcordArgs);
}

impl Render for AnalysisResults {
    fn render_human(&self, args: &ConcordArgs) {
        if self.matches.is_empty() {
            println!("No matches found for \"{}\".", self.query);
            return;
        }

        for m in &self.matches {
            println!("{}", format_match(m));
        }

        if args.verbosity() > 1 {
            println!();
            println!(
                "{} match(es) for \"{}\" with window {}",
                self.total_matches, self.query, self.window
            );
        }

        if let Some(highlighted) = &self.highlighted {
            println!();
            println!("{highlighted}");
        }
    }
}

impl Render for ExportResults {
    fn render_human(&self, _args: &ConcordArgs) {
        println!("Results saved to {} ({} line(s))", self.path, self.matches_written);
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Render>(message: &str, result: &T, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.render_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ConcordArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_results_serialize() {
        let results = AnalysisResults {
            query: "cat".to_string(),
            window: 1,
            total_matches: 0,
            matches: vec![],
            highlighted: None,
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"query\":\"cat\""));
        assert!(json.contains("\"total_matches\":0"));
    }

    #[test]
    fn test_export_results_serialize() {
        let results = ExportResults {
            path: "results.txt".to_string(),
            matches_written: 3,
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"matches_written\":3"));
    }
}
