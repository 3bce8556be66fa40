//! Plain-text report formatting and file export.
//!
//! A report has one line per match: the matched surface form with its
//! dependency label, then the left and right neighbor listings in the order
//! they were collected (reading order), each neighbor rendered as
//! `surface (Dep: label)`.
//!
//! ```text
//! cats (Dep: nsubj) | Left: [The (Dep: det)] | Right: [run (Dep: root)]
//! ```
//!
//! [`export`] writes the report to disk as UTF-8 plain text. The write is
//! atomic from the caller's perspective: the report is written to a sibling
//! temporary file first and renamed into place, so a failed export never
//! leaves a partial file visible.

use std::fs;
use std::path::Path;

use log::debug;

use crate::concordance::extractor::{MatchResult, NeighborRef};
use crate::error::{ConcordError, Result};

fn format_neighbors(neighbors: &[NeighborRef]) -> String {
    let parts: Vec<String> = neighbors
        .iter()
        .map(|n| format!("{} (Dep: {})", n.text, n.dep))
        .collect();
    parts.join(", ")
}

/// Format one line for a single match.
pub fn format_match(m: &MatchResult) -> String {
    format!(
        "{} (Dep: {}) | Left: [{}] | Right: [{}]",
        m.text,
        m.dep,
        format_neighbors(&m.left_neighbors),
        format_neighbors(&m.right_neighbors),
    )
}

/// Format the full report: one line per match, joined with a single
/// line break and no trailing separator. An empty match list yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use concord::annotation::token::{Document, Token};
/// use concord::concordance::extractor::extract;
/// use concord::concordance::report::format_report;
///
/// let doc = Document::new(vec![
///     Token::new("The", 0).with_lemma("the").with_dep("det"),
///     Token::new("cats", 1).with_lemma("cat").with_dep("nsubj"),
///     Token::new("run", 2).with_lemma("run").with_dep("root"),
/// ]);
/// let matches = extract(&doc, "cat", 1).unwrap();
///
/// assert_eq!(
///     format_report(&matches),
///     "cats (Dep: nsubj) | Left: [The (Dep: det)] | Right: [run (Dep: root)]"
/// );
/// ```
pub fn format_report(matches: &[MatchResult]) -> String {
    let lines: Vec<String> = matches.iter().map(format_match).collect();
    lines.join("\n")
}

/// Write the report for `matches` to `path` as UTF-8 plain text.
///
/// Concurrent exports to the same path are not coordinated; the last writer
/// wins. I/O failures surface as [`ConcordError::Export`] and leave any
/// previously exported file untouched.
pub fn export(matches: &[MatchResult], path: &Path) -> Result<()> {
    let report = format_report(matches);

    let file_name = path
        .file_name()
        .ok_or_else(|| ConcordError::export(format!("invalid export path: {}", path.display())))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let write_result = fs::write(&tmp_path, report.as_bytes())
        .and_then(|_| fs::rename(&tmp_path, path));

    match write_result {
        Ok(()) => {
            debug!("exported {} matches to {}", matches.len(), path.display());
            Ok(())
        }
        Err(e) => {
            // Best effort: don't leave the temporary file behind.
            let _ = fs::remove_file(&tmp_path);
            Err(ConcordError::export(format!(
                "failed to write {}: {e}",
                path.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::token::{Document, Token};
    use crate::concordance::extractor::extract;
    use tempfile::TempDir;

    fn sample_matches() -> Vec<MatchResult> {
        let doc = Document::new(vec![
            Token::new("The", 0).with_lemma("the").with_dep("det"),
            Token::new("cats", 1).with_lemma("cat").with_dep("nsubj"),
            Token::new("run", 2).with_lemma("run").with_dep("root"),
        ]);
        extract(&doc, "cat", 1).unwrap()
    }

    #[test]
    fn test_format_single_match() {
        let report = format_report(&sample_matches());
        assert_eq!(
            report,
            "cats (Dep: nsubj) | Left: [The (Dep: det)] | Right: [run (Dep: root)]"
        );
    }

    #[test]
    fn test_empty_matches_yield_empty_report() {
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn test_line_count_equals_match_count() {
        let doc = Document::new(vec![
            Token::new("cat", 0),
            Token::new("dog", 1),
            Token::new("cat", 2),
            Token::new("cat", 3),
        ]);
        let matches = extract(&doc, "cat", 1).unwrap();
        let report = format_report(&matches);

        assert_eq!(report.lines().count(), matches.len());
        assert_eq!(report.lines().count(), 3);
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn test_empty_neighbor_listing() {
        let doc = Document::new(vec![Token::new("cat", 0)]);
        let matches = extract(&doc, "cat", 1).unwrap();

        assert_eq!(
            format_report(&matches),
            "cat (Dep: dep) | Left: [] | Right: []"
        );
    }

    #[test]
    fn test_export_writes_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.txt");

        export(&sample_matches(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format_report(&sample_matches()));
        // No temporary file left behind.
        assert!(!temp_dir.path().join("results.txt.tmp").exists());
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.txt");

        fs::write(&path, "stale").unwrap();
        export(&sample_matches(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("cats"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("results.txt");

        let result = export(&sample_matches(), &path);
        assert!(matches!(result, Err(ConcordError::Export(_))));
        assert!(!path.exists());
    }
}
