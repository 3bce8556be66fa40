//! Highlighted rendering of a document with its matches.
//!
//! Produces a reading-order, space-separated rendering of every token where
//! matched tokens are wrapped in `[[…]]` and neighbor tokens in `<…>`. This
//! is a lossy, display-only view: original whitespace and punctuation
//! spacing are not preserved.

use std::collections::HashSet;

use crate::annotation::token::Document;
use crate::concordance::extractor::MatchResult;

/// Marker wrapped around matched tokens.
const MATCH_OPEN: &str = "[[";
const MATCH_CLOSE: &str = "]]";

/// Marker wrapped around neighbor tokens.
const NEIGHBOR_OPEN: &str = "<";
const NEIGHBOR_CLOSE: &str = ">";

/// Render the document with match and neighbor styling.
///
/// A token that is both a match and a neighbor of another match (overlapping
/// windows) gets match styling.
///
/// # Examples
///
/// ```
/// use concord::annotation::token::{Document, Token};
/// use concord::concordance::extractor::extract;
/// use concord::concordance::highlight::render_highlighted;
///
/// let doc = Document::new(vec![
///     Token::new("The", 0),
///     Token::new("cats", 1).with_lemma("cat"),
///     Token::new("run", 2),
/// ]);
/// let matches = extract(&doc, "cat", 1).unwrap();
///
/// assert_eq!(render_highlighted(&doc, &matches), "<The> [[cats]] <run>");
/// ```
pub fn render_highlighted(document: &Document, matches: &[MatchResult]) -> String {
    let mut match_positions = HashSet::new();
    let mut neighbor_positions = HashSet::new();

    for m in matches {
        match_positions.insert(m.position);
        for n in m.left_neighbors.iter().chain(m.right_neighbors.iter()) {
            neighbor_positions.insert(n.position);
        }
    }

    let rendered: Vec<String> = document
        .iter()
        .map(|token| {
            if match_positions.contains(&token.position) {
                format!("{MATCH_OPEN}{}{MATCH_CLOSE}", token.text)
            } else if neighbor_positions.contains(&token.position) {
                format!("{NEIGHBOR_OPEN}{}{NEIGHBOR_CLOSE}", token.text)
            } else {
                token.text.clone()
            }
        })
        .collect();

    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::token::Token;
    use crate::concordance::extractor::extract;

    fn doc(words: &[&str]) -> Document {
        Document::new(
            words
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(*w, i))
                .collect(),
        )
    }

    #[test]
    fn test_basic_highlighting() {
        let doc = doc(&["The", "cat", "sat", "here"]);
        let matches = extract(&doc, "cat", 1).unwrap();

        assert_eq!(render_highlighted(&doc, &matches), "<The> [[cat]] <sat> here");
    }

    #[test]
    fn test_no_matches_renders_plain() {
        let doc = doc(&["The", "cat", "sat"]);
        assert_eq!(render_highlighted(&doc, &[]), "The cat sat");
    }

    #[test]
    fn test_match_styling_wins_over_neighbor() {
        // Adjacent matches: each is a neighbor of the other.
        let doc = doc(&["cat", "cat"]);
        let matches = extract(&doc, "cat", 1).unwrap();

        assert_eq!(render_highlighted(&doc, &matches), "[[cat]] [[cat]]");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render_highlighted(&Document::empty(), &[]), "");
    }
}
