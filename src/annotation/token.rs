//! Token and document types for annotated text.
//!
//! This module defines the core data structures produced by the annotation
//! pipeline and consumed by the concordance extractor.
//!
//! # Core Types
//!
//! - [`Token`] - A single annotated token with surface form, lemma, and
//!   dependency label
//! - [`Document`] - An ordered sequence of tokens for one analysis request
//!
//! # Examples
//!
//! Creating a token:
//!
//! ```
//! use concord::annotation::token::Token;
//!
//! let token = Token::new("cats", 1).with_lemma("cat").with_dep("nsubj");
//! assert_eq!(token.text, "cats");
//! assert_eq!(token.lemma, "cat");
//! assert_eq!(token.dep, "nsubj");
//! assert_eq!(token.position, 1);
//! ```
//!
//! Building a document:
//!
//! ```
//! use concord::annotation::token::{Document, Token};
//!
//! let doc = Document::new(vec![
//!     Token::new("Hello", 0).with_lemma("hello").with_dep("root"),
//!     Token::new("world", 1).with_lemma("world").with_dep("dobj"),
//! ]);
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.tokens()[1].lemma, "world");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single annotated token.
///
/// Tokens are produced by an [`Annotator`](crate::annotation::Annotator) and
/// are immutable afterwards. Every token carries its exact surface text, a
/// dictionary base form (lemma), and a grammatical dependency label.
///
/// # Fields
///
/// - `text` - The surface form, exactly as it appears in the source
/// - `lemma` - The dictionary base form (e.g. "running" → "run")
/// - `dep` - The dependency label assigned by the annotator
/// - `position` - Position in the document (0-based, unique, contiguous)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text of the token
    pub text: String,

    /// The dictionary base form of the token
    pub lemma: String,

    /// The grammatical dependency label of the token
    pub dep: String,

    /// The position of the token in the document (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given surface text and position.
    ///
    /// The lemma defaults to the lowercased surface form and the dependency
    /// label to `"dep"` (the unclassified fallback), so a bare token is
    /// already well-formed before the lemmatizer and tagger run.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let lemma = text.to_lowercase();
        Token {
            text,
            lemma,
            dep: "dep".to_string(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with surface text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let mut token = Token::new(text, position);
        token.start_offset = start_offset;
        token.end_offset = end_offset;
        token
    }

    /// Set the lemma of this token.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Set the dependency label of this token.
    pub fn with_dep<S: Into<String>>(mut self, dep: S) -> Self {
        self.dep = dep.into();
        self
    }

    /// Check whether this token consists entirely of punctuation.
    pub fn is_punct(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| !c.is_alphanumeric())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// An annotated document: an ordered sequence of tokens.
///
/// Documents are produced fresh for each analysis request and never
/// persisted. Token positions are guaranteed to be 0-based and contiguous.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    /// Create a document from a token sequence.
    ///
    /// Positions are renumbered to be contiguous from 0, so annotators that
    /// drop segments during tokenization cannot leave gaps.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.position = i;
        }
        Document { tokens }
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Document { tokens: Vec::new() }
    }

    /// Get the tokens of this document in reading order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the token at the given position, if it exists.
    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Get the number of tokens in this document.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if this document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl IntoIterator for Document {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("Hello", 0);
        assert_eq!(token.text, "Hello");
        assert_eq!(token.lemma, "hello");
        assert_eq!(token.dep, "dep");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_token_builders() {
        let token = Token::new("cats", 2).with_lemma("cat").with_dep("nsubj");
        assert_eq!(token.lemma, "cat");
        assert_eq!(token.dep, "nsubj");
    }

    #[test]
    fn test_token_is_punct() {
        assert!(Token::new(",", 0).is_punct());
        assert!(Token::new("!?", 0).is_punct());
        assert!(!Token::new("word", 0).is_punct());
        assert!(!Token::new("", 0).is_punct());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_document_renumbers_positions() {
        let doc = Document::new(vec![Token::new("a", 7), Token::new("b", 3)]);
        assert_eq!(doc.tokens()[0].position, 0);
        assert_eq!(doc.tokens()[1].position, 1);
    }

    #[test]
    fn test_document_access() {
        let doc = Document::new(vec![Token::new("a", 0), Token::new("b", 1)]);
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert_eq!(doc.get(1).unwrap().text, "b");
        assert!(doc.get(2).is_none());

        let texts: Vec<&str> = doc.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
