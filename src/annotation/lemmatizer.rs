//! Rule-based English lemmatizer.
//!
//! Maps surface forms to dictionary base forms using an irregular-form
//! exception table followed by ordered suffix rules. This is a deliberate
//! approximation: it covers regular inflection (plural `-s`, `-ing`, `-ed`)
//! and the common irregular verbs and nouns, which is what lemma-based
//! concordance matching needs. Anything it cannot resolve falls back to the
//! lowercased surface form.
//!
//! # Examples
//!
//! ```
//! use concord::annotation::lemmatizer::Lemmatizer;
//!
//! let lemmatizer = Lemmatizer::new();
//! assert_eq!(lemmatizer.lemma_of("cats"), "cat");
//! assert_eq!(lemmatizer.lemma_of("running"), "run");
//! assert_eq!(lemmatizer.lemma_of("went"), "go");
//! ```

use std::collections::HashMap;

use crate::annotation::token::Token;

/// Irregular surface form → lemma pairs.
///
/// Covers be/have/do forms, frequent irregular verbs, irregular plurals, and
/// `-ing`/`-ed` forms of common e-dropping verbs that the suffix rules would
/// otherwise truncate.
const EXCEPTIONS: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    // irregular verbs
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("made", "make"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("found", "find"),
    ("got", "get"),
    ("gotten", "get"),
    ("said", "say"),
    ("told", "tell"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stood", "stand"),
    ("held", "hold"),
    ("kept", "keep"),
    ("left", "leave"),
    ("felt", "feel"),
    ("met", "meet"),
    ("sat", "sit"),
    ("lost", "lose"),
    ("paid", "pay"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("sent", "send"),
    ("built", "build"),
    ("heard", "hear"),
    ("began", "begin"),
    ("begun", "begin"),
    ("broke", "break"),
    ("broken", "break"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("drove", "drive"),
    ("driven", "drive"),
    // e-dropping -ing / -ed forms the suffix rules would truncate
    ("making", "make"),
    ("taking", "take"),
    ("coming", "come"),
    ("giving", "give"),
    ("using", "use"),
    ("used", "use"),
    ("writing", "write"),
    ("living", "live"),
    ("lived", "live"),
    ("moving", "move"),
    ("moved", "move"),
    ("loved", "love"),
    ("loving", "love"),
    ("changing", "change"),
    ("changed", "change"),
    ("creating", "create"),
    ("created", "create"),
    ("providing", "provide"),
    ("provided", "provide"),
    ("becoming", "become"),
    ("became", "become"),
    ("leaving", "leave"),
    ("believed", "believe"),
    ("received", "receive"),
    ("decided", "decide"),
    ("included", "include"),
    ("including", "include"),
    ("continued", "continue"),
    ("described", "describe"),
    // irregular plurals
    ("mice", "mouse"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("wolves", "wolf"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("knives", "knife"),
];

/// A lemmatizer backed by an exception table and ordered suffix rules.
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    /// Create a new lemmatizer with the default English exception table.
    pub fn new() -> Self {
        Lemmatizer {
            exceptions: EXCEPTIONS.iter().copied().collect(),
        }
    }

    /// Compute the lemma of a single word.
    ///
    /// The word is lowercased first; punctuation and anything the rules do
    /// not cover come back unchanged (apart from case folding).
    pub fn lemma_of(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if !lower.chars().any(|c| c.is_alphabetic()) {
            return lower;
        }

        if let Some(lemma) = self.exceptions.get(lower.as_str()) {
            return (*lemma).to_string();
        }

        Self::strip_suffix(&lower)
    }

    /// Fill in the lemma of every token in place.
    pub fn apply(&self, tokens: &mut [Token]) {
        for token in tokens.iter_mut() {
            token.lemma = self.lemma_of(&token.text);
        }
    }

    /// Apply the ordered suffix rules to a lowercased word.
    fn strip_suffix(word: &str) -> String {
        // Plural endings, most specific first.
        if let Some(stem) = word.strip_suffix("ies") {
            if word.len() > 4 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        for es_suffix in ["ches", "shes", "xes", "zes"] {
            if word.ends_with(es_suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
            && word.len() > 3
        {
            return word[..word.len() - 1].to_string();
        }

        // Progressive -ing.
        if let Some(stem) = word.strip_suffix("ing") {
            if word.len() > 5 && stem.chars().any(|c| "aeiouy".contains(c)) {
                return Self::undouble(stem);
            }
        }

        // Past tense -ed.
        if let Some(stem) = word.strip_suffix("ed") {
            if word.len() > 4 && stem.chars().any(|c| "aeiouy".contains(c)) {
                if let Some(y_stem) = stem.strip_suffix('i') {
                    return format!("{y_stem}y");
                }
                return Self::undouble(stem);
            }
        }

        word.to_string()
    }

    /// Undo consonant doubling left behind by suffix removal
    /// ("runn" → "run"), keeping legitimate doubles like "ll" and "ss".
    fn undouble(stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        if chars.len() >= 2 {
            let last = chars[chars.len() - 1];
            let prev = chars[chars.len() - 2];
            if last == prev && !"aeiou".contains(last) && !"lsz".contains(last) {
                return chars[..chars.len() - 1].iter().collect();
            }
        }
        stem.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("cats"), "cat");
        assert_eq!(lemmatizer.lemma_of("dogs"), "dog");
        assert_eq!(lemmatizer.lemma_of("cities"), "city");
        assert_eq!(lemmatizer.lemma_of("boxes"), "box");
        assert_eq!(lemmatizer.lemma_of("wishes"), "wish");
        assert_eq!(lemmatizer.lemma_of("classes"), "class");
    }

    #[test]
    fn test_plural_rules_leave_short_words_alone() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("bus"), "bus");
        assert_eq!(lemmatizer.lemma_of("this"), "this");
        assert_eq!(lemmatizer.lemma_of("grass"), "grass");
    }

    #[test]
    fn test_progressive_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("running"), "run");
        assert_eq!(lemmatizer.lemma_of("walking"), "walk");
        assert_eq!(lemmatizer.lemma_of("falling"), "fall");
        assert_eq!(lemmatizer.lemma_of("making"), "make");
    }

    #[test]
    fn test_past_tense_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("walked"), "walk");
        assert_eq!(lemmatizer.lemma_of("stopped"), "stop");
        assert_eq!(lemmatizer.lemma_of("studied"), "study");
        assert_eq!(lemmatizer.lemma_of("jumped"), "jump");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("went"), "go");
        assert_eq!(lemmatizer.lemma_of("was"), "be");
        assert_eq!(lemmatizer.lemma_of("mice"), "mouse");
        assert_eq!(lemmatizer.lemma_of("children"), "child");
        assert_eq!(lemmatizer.lemma_of("Ran"), "run");
    }

    #[test]
    fn test_case_folding() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of("Cats"), "cat");
        assert_eq!(lemmatizer.lemma_of("RUNNING"), "run");
    }

    #[test]
    fn test_punctuation_passes_through() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma_of(","), ",");
        assert_eq!(lemmatizer.lemma_of("42"), "42");
    }

    #[test]
    fn test_apply_fills_tokens() {
        let lemmatizer = Lemmatizer::new();
        let mut tokens = vec![Token::new("Cats", 0), Token::new("ran", 1)];
        lemmatizer.apply(&mut tokens);
        assert_eq!(tokens[0].lemma, "cat");
        assert_eq!(tokens[1].lemma, "run");
    }
}
