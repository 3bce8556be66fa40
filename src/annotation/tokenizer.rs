//! Unicode word-boundary tokenizer.
//!
//! Splits text using Unicode word boundary rules (UAX #29) via the
//! `unicode-segmentation` crate. Unlike a search tokenizer, this one keeps
//! punctuation marks as tokens: the dependency tagger assigns them a `punct`
//! label and the concordance treats them as ordinary neighbors, which matches
//! how a parser-produced token stream looks.
//!
//! # Examples
//!
//! ```
//! use concord::annotation::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, world!");
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::annotation::token::Token;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Whitespace segments are discarded; word segments and punctuation segments
/// become tokens. Byte offsets are tracked cumulatively over the segment
/// stream, so repeated words receive their true offsets.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize the given text into a sequence of tokens.
    ///
    /// Positions are assigned contiguously from 0 in reading order. Lemmas
    /// and dependency labels are left at their defaults for the later
    /// pipeline stages to fill in.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        for segment in text.split_word_bounds() {
            let start = offset;
            offset += segment.len();

            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            let position = tokens.len();
            tokens.push(Token::with_offsets(segment, position, start, offset));
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("The cats run.");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "cats", "run", "."]);
    }

    #[test]
    fn test_positions_are_contiguous() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("a  b\t c \n d");

        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_offsets_for_repeated_words() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("run run");

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 3);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 7);
    }

    #[test]
    fn test_unicode_text() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("café résumé");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[1].text, "résumé");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t").is_empty());
    }
}
