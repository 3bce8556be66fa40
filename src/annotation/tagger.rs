//! Heuristic dependency tagger.
//!
//! Assigns a grammatical dependency label to every token using closed-class
//! word lists and positional rules, one sentence span at a time. This is not
//! a parser: it approximates the labels a statistical dependency parser
//! would produce, well enough for concordance display. Tokens the rules
//! cannot classify keep the fallback label `dep`.
//!
//! Labels produced: `punct`, `det`, `prep`, `pobj`, `aux`, `neg`, `cc`,
//! `conj`, `advmod`, `amod`, `nummod`, `nsubj`, `root`, `dobj`, `compound`,
//! and the fallback `dep`.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::annotation::token::Token;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "no", "every", "each", "some", "any", "all", "both",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "over", "under", "about", "into",
    "through", "after", "before", "between", "during", "against", "among", "without", "within",
    "across", "behind", "beyond", "near", "toward", "towards", "upon",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const NEGATIONS: &[&str] = &["not", "never", "n't"];

/// Adjective-forming suffixes used to guess `amod` for pre-head modifiers.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ive", "able", "ible", "ical", "ish", "less",
];

lazy_static! {
    static ref DETERMINER_SET: HashSet<&'static str> = DETERMINERS.iter().copied().collect();
    static ref PREPOSITION_SET: HashSet<&'static str> = PREPOSITIONS.iter().copied().collect();
    static ref AUXILIARY_SET: HashSet<&'static str> = AUXILIARIES.iter().copied().collect();
    static ref CONJUNCTION_SET: HashSet<&'static str> = CONJUNCTIONS.iter().copied().collect();
    static ref NEGATION_SET: HashSet<&'static str> = NEGATIONS.iter().copied().collect();
    static ref NUMBER_RE: Regex = Regex::new(r"^\d+([.,]\d+)*$").unwrap();
}

/// A tagger that labels tokens with approximate dependency relations.
#[derive(Clone, Debug, Default)]
pub struct DependencyTagger;

impl DependencyTagger {
    /// Create a new dependency tagger.
    pub fn new() -> Self {
        DependencyTagger
    }

    /// Assign a dependency label to every token in place.
    ///
    /// The token sequence is split into sentence spans at terminal
    /// punctuation, and each span is labeled independently.
    pub fn apply(&self, tokens: &mut [Token]) {
        let mut span_start = 0;
        for i in 0..tokens.len() {
            if Self::is_sentence_break(&tokens[i]) {
                Self::tag_span(&mut tokens[span_start..i]);
                span_start = i + 1;
            }
        }
        Self::tag_span(&mut tokens[span_start..]);

        for token in tokens.iter_mut() {
            if token.is_punct() {
                token.dep = "punct".to_string();
            }
        }
    }

    fn is_sentence_break(token: &Token) -> bool {
        matches!(token.text.as_str(), "." | "!" | "?" | ";")
    }

    /// Label a single sentence span.
    ///
    /// Closed-class words are labeled from the word lists first; the
    /// remaining content words are labeled positionally: with two or more
    /// content words the second is taken as the clausal head (subject-first
    /// order), with exactly one that word is the head.
    fn tag_span(tokens: &mut [Token]) {
        // Pass 1: closed classes and shape-based labels.
        for token in tokens.iter_mut() {
            if token.is_punct() {
                token.dep = "punct".to_string();
                continue;
            }
            let lower = token.text.to_lowercase();
            let label = if DETERMINER_SET.contains(lower.as_str()) {
                "det"
            } else if PREPOSITION_SET.contains(lower.as_str()) {
                "prep"
            } else if CONJUNCTION_SET.contains(lower.as_str()) {
                "cc"
            } else if NEGATION_SET.contains(lower.as_str()) {
                "neg"
            } else if AUXILIARY_SET.contains(lower.as_str()) {
                "aux"
            } else if NUMBER_RE.is_match(&lower) {
                "nummod"
            } else if lower.len() > 3 && lower.ends_with("ly") {
                "advmod"
            } else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                "amod"
            } else {
                continue;
            };
            token.dep = label.to_string();
        }

        // Pass 2: positional labels for the remaining content words.
        let content: Vec<usize> = (0..tokens.len())
            .filter(|&i| tokens[i].dep == "dep")
            .collect();

        let root_idx = match content.len() {
            0 => {
                // A span of only closed-class words: promote the last
                // auxiliary to head so every sentence has one.
                if let Some(i) = (0..tokens.len()).rev().find(|&i| tokens[i].dep == "aux") {
                    tokens[i].dep = "root".to_string();
                }
                return;
            }
            1 => content[0],
            _ => content[1],
        };
        tokens[root_idx].dep = "root".to_string();

        let mut after_prep = false;
        let mut after_cc = false;
        let mut saw_object = false;
        for i in 0..tokens.len() {
            match tokens[i].dep.as_str() {
                "prep" => {
                    after_prep = true;
                    after_cc = false;
                }
                "cc" => {
                    after_cc = true;
                }
                "dep" => {
                    let label = if i < root_idx {
                        // Pre-head content words: the nearest is the subject,
                        // anything further out modifies it.
                        if content.first() == Some(&i) && content.len() > 1 {
                            "nsubj"
                        } else {
                            "compound"
                        }
                    } else if after_prep {
                        after_prep = false;
                        "pobj"
                    } else if after_cc {
                        after_cc = false;
                        "conj"
                    } else if !saw_object {
                        saw_object = true;
                        "dobj"
                    } else {
                        continue;
                    };
                    tokens[i].dep = label.to_string();
                }
                _ => {}
            }
        }
    }
}
