//! Lemma-based concordance extraction.
//!
//! The extractor walks an annotated document once and, for every token whose
//! lemma matches the query, gathers up to `window` neighboring tokens on each
//! side together with their dependency labels.
//!
//! # Neighbor ordering
//!
//! Both neighbor lists are returned in reading order: left neighbors
//! left-to-right as they appear in the source (farthest from the match
//! first), right neighbors likewise (nearest to the match first). Display,
//! JSON output, and file export all use this single convention. With a
//! window of 1 this coincides with nearest-first on both sides.
//!
//! # Examples
//!
//! ```
//! use concord::annotation::token::{Document, Token};
//! use concord::concordance::extractor::extract;
//!
//! let doc = Document::new(vec![
//!     Token::new("The", 0).with_lemma("the").with_dep("det"),
//!     Token::new("cats", 1).with_lemma("cat").with_dep("nsubj"),
//!     Token::new("run", 2).with_lemma("run").with_dep("root"),
//! ]);
//!
//! let matches = extract(&doc, "cat", 1).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text, "cats");
//! assert_eq!(matches[0].left_neighbors[0].text, "The");
//! assert_eq!(matches[0].right_neighbors[0].dep, "root");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::annotation::token::{Document, Token};
use crate::error::{ConcordError, Result};

/// A read-only projection of a neighboring token, for display and export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeighborRef {
    /// The surface text of the neighbor
    pub text: String,

    /// The dependency label of the neighbor
    pub dep: String,

    /// The position of the neighbor in the document
    pub position: usize,
}

impl NeighborRef {
    fn from_token(token: &Token) -> Self {
        NeighborRef {
            text: token.text.clone(),
            dep: token.dep.clone(),
            position: token.position,
        }
    }
}

/// One matched token with its neighbor window.
///
/// Matches are collected in document order; neighbor lists are in reading
/// order (see the module documentation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The surface text of the matched token
    pub text: String,

    /// The dependency label of the matched token
    pub dep: String,

    /// The position of the matched token in the document
    pub position: usize,

    /// Up to `window` neighbors to the left, in reading order
    pub left_neighbors: Vec<NeighborRef>,

    /// Up to `window` neighbors to the right, in reading order
    pub right_neighbors: Vec<NeighborRef>,
}

/// Find all tokens whose lemma matches `query_lemma`, case-insensitively,
/// and gather up to `window` neighbors on each side of each match.
///
/// A pure function of its inputs: no mutation, deterministic, repeatable.
///
/// # Errors
///
/// Returns [`ConcordError::InvalidInput`] when `window` is zero. An empty or
/// whitespace-only query is not an error; it simply cannot match anything
/// and yields an empty result.
pub fn extract(document: &Document, query_lemma: &str, window: usize) -> Result<Vec<MatchResult>> {
    if window == 0 {
        return Err(ConcordError::invalid_input(
            "window size must be at least 1",
        ));
    }

    let query = query_lemma.trim().to_lowercase();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let tokens = document.tokens();
    let mut matches = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.lemma.to_lowercase() != query {
            continue;
        }

        // Gather nearest-first on both sides, then put the left side into
        // reading order. Expansion stops at the document boundary.
        let mut left = Vec::new();
        let mut right = Vec::new();
        for j in 1..=window {
            if let Some(neighbor) = i.checked_sub(j).and_then(|k| tokens.get(k)) {
                left.push(NeighborRef::from_token(neighbor));
            }
            if let Some(neighbor) = tokens.get(i + j) {
                right.push(NeighborRef::from_token(neighbor));
            } else if j > i {
                // Both sides exhausted; larger j cannot reach any token.
                break;
            }
        }
        left.reverse();

        matches.push(MatchResult {
            text: token.text.clone(),
            dep: token.dep.clone(),
            position: i,
            left_neighbors: left,
            right_neighbors: right,
        });
    }

    debug!(
        "extract: query={:?} window={} matches={}",
        query,
        window,
        matches.len()
    );
    Ok(matches)
}
