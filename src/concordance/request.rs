//! Explicit analysis requests.
//!
//! All per-analysis state (query, window size) travels in an
//! [`AnalysisRequest`] that the caller constructs and passes in; nothing is
//! carried over between requests. One request is fully processed
//! (annotate → extract) before the next begins.

use serde::{Deserialize, Serialize};

use crate::annotation::annotator::Annotator;
use crate::annotation::token::Document;
use crate::concordance::extractor::{MatchResult, extract};
use crate::error::{ConcordError, Result};

/// Default neighbor-window size.
pub const DEFAULT_WINDOW: usize = 1;

/// A single concordance analysis request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The lemma to search for (matched case-insensitively)
    pub query: String,

    /// How many neighbors to gather on each side of a match
    pub window: usize,
}

/// Everything produced by one analysis request.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOutcome {
    /// The annotated document the matches refer into
    pub document: Document,

    /// The matches, in document order
    pub matches: Vec<MatchResult>,
}

impl AnalysisRequest {
    /// Create a request with the default window size.
    pub fn new<S: Into<String>>(query: S) -> Self {
        AnalysisRequest {
            query: query.into(),
            window: DEFAULT_WINDOW,
        }
    }

    /// Set the neighbor-window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Validate the request before any work happens.
    ///
    /// Rejects an empty or whitespace-only query and a zero window with a
    /// user-facing message.
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(ConcordError::invalid_input(
                "Search term must not be empty",
            ));
        }
        if self.window == 0 {
            return Err(ConcordError::invalid_input(
                "window size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Run the full pipeline for this request: annotate the text, then
    /// extract the concordance.
    pub fn run(&self, annotator: &dyn Annotator, text: &str) -> Result<AnalysisOutcome> {
        self.validate()?;
        let document = annotator.annotate(text)?;
        let matches = extract(&document, &self.query, self.window)?;
        Ok(AnalysisOutcome { document, matches })
    }
}
