//! Text annotation pipeline.
//!
//! Converts raw text into an annotated [`Document`](token::Document) whose
//! tokens each carry a surface form, a lemma, and a dependency label:
//!
//! ```text
//! Raw Text → Tokenizer → Lemmatizer → Dependency Tagger → Document
//! ```
//!
//! The [`Annotator`] trait is the public seam: the concordance layer only
//! depends on it, never on the concrete pipeline stages.

pub mod annotator;
pub mod english;
pub mod lemmatizer;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use annotator::Annotator;
pub use english::EnglishAnnotator;
pub use lemmatizer::Lemmatizer;
pub use tagger::DependencyTagger;
pub use token::{Document, Token};
pub use tokenizer::WordTokenizer;
