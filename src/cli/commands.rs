//! Command implementations for the concord CLI.

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::annotation::english::EnglishAnnotator;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::concordance::highlight::render_highlighted;
use crate::concordance::report;
use crate::concordance::request::AnalysisRequest;
use crate::error::{ConcordError, Result};

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Export(export_args) => export(export_args.clone(), &args),
    }
}

/// Resolve the input text: inline argument or --file, exactly one of them,
/// and it must contain something to analyze.
fn resolve_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    let text = match (text, file) {
        (Some(_), Some(_)) => {
            return Err(ConcordError::invalid_input(
                "Provide either inline TEXT or --file, not both",
            ));
        }
        (Some(text), None) => text,
        (None, Some(path)) => {
            info!("reading input text from {}", path.display());
            fs::read_to_string(&path)?
        }
        (None, None) => {
            return Err(ConcordError::invalid_input(
                "No input text. Pass TEXT as an argument or use --file",
            ));
        }
    };

    if text.trim().is_empty() {
        return Err(ConcordError::invalid_input(
            "Input text must not be empty",
        ));
    }
    Ok(text)
}

/// Analyze text and show matches inline.
fn analyze(args: AnalyzeArgs, cli_args: &ConcordArgs) -> Result<()> {
    let text = resolve_text(args.text, args.file)?;

    let request = AnalysisRequest::new(&args.query).with_window(args.window);
    let annotator = EnglishAnnotator::new();
    let outcome = request.run(&annotator, &text)?;

    let highlighted = args
        .highlight
        .then(|| render_highlighted(&outcome.document, &outcome.matches));

    output_result(
        "Analysis complete",
        &AnalysisResults {
            query: args.query,
            window: args.window,
            total_matches: outcome.matches.len(),
            matches: outcome.matches,
            highlighted,
        },
        cli_args,
    )
}

/// Analyze text and write the report to a file.
fn export(args: ExportArgs, cli_args: &ConcordArgs) -> Result<()> {
    let text = resolve_text(args.text, args.file)?;

    let request = AnalysisRequest::new(&args.query).with_window(args.window);
    let annotator = EnglishAnnotator::new();
    let outcome = request.run(&annotator, &text)?;

    report::export(&outcome.matches, &args.output)?;

    output_result(
        "Export complete",
        &ExportResults {
            path: args.output.to_string_lossy().to_string(),
            matches_written: outcome.matches.len(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_inline_text() {
        let text = resolve_text(Some("hello".to_string()), None).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_resolve_text_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "The cats run.").unwrap();

        let text = resolve_text(None, Some(path)).unwrap();
        assert_eq!(text, "The cats run.");
    }

    #[test]
    fn test_resolve_text_requires_one_source() {
        assert!(matches!(
            resolve_text(None, None),
            Err(ConcordError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_text(Some("a".to_string()), Some(PathBuf::from("b"))),
            Err(ConcordError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_text_rejects_empty_text() {
        assert!(matches!(
            resolve_text(Some(String::new()), None),
            Err(ConcordError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_text(Some("  \n\t ".to_string()), None),
            Err(ConcordError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_text_rejects_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "   \n").unwrap();

        assert!(matches!(
            resolve_text(None, Some(path)),
            Err(ConcordError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_text_missing_file_is_io_error() {
        let result = resolve_text(None, Some(PathBuf::from("/no/such/file.txt")));
        assert!(matches!(result, Err(ConcordError::Io(_))));
    }
}
