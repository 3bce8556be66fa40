use log::debug;

use crate::annotation::annotator::Annotator;
use crate::annotation::lemmatizer::Lemmatizer;
use crate::annotation::tagger::DependencyTagger;
use crate::annotation::token::Document;
use crate::annotation::tokenizer::WordTokenizer;
use crate::error::Result;

/// The built-in English annotator.
///
/// Runs the full annotation pipeline: word tokenization, lemmatization, and
/// dependency tagging. Entirely rule-based, so it needs no external language
/// model; richer annotators can replace it behind the [`Annotator`] trait.
#[derive(Clone, Debug, Default)]
pub struct EnglishAnnotator {
    tokenizer: WordTokenizer,
    lemmatizer: Lemmatizer,
    tagger: DependencyTagger,
}

impl EnglishAnnotator {
    pub fn new() -> Self {
        EnglishAnnotator {
            tokenizer: WordTokenizer::new(),
            lemmatizer: Lemmatizer::new(),
            tagger: DependencyTagger::new(),
        }
    }
}

impl Annotator for EnglishAnnotator {
    fn annotate(&self, text: &str) -> Result<Document> {
        let mut tokens = self.tokenizer.tokenize(text);
        self.lemmatizer.apply(&mut tokens);
        self.tagger.apply(&mut tokens);
        debug!("annotated {} tokens", tokens.len());
        Ok(Document::new(tokens))
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
