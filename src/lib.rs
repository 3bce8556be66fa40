//! # Concord
//!
//! A lemma-based concordance and word-dependency extraction library.
//!
//! Given a piece of text and a search word, concord finds every occurrence
//! of that word (matched by dictionary base form) together with its
//! neighboring tokens and their grammatical dependency labels.
//!
//! ## Features
//!
//! - Rule-based annotation pipeline (tokenizer, lemmatizer, dependency tagger)
//! - Pluggable [`Annotator`](annotation::Annotator) trait for external NLP stacks
//! - Configurable neighbor window
//! - Highlighted rendering and plain-text report export
//!
//! ## Example
//!
//! ```
//! use concord::annotation::EnglishAnnotator;
//! use concord::concordance::AnalysisRequest;
//!
//! let annotator = EnglishAnnotator::new();
//! let outcome = AnalysisRequest::new("cat")
//!     .run(&annotator, "The cats run.")
//!     .unwrap();
//!
//! assert_eq!(outcome.matches.len(), 1);
//! assert_eq!(outcome.matches[0].text, "cats");
//! ```

pub mod annotation;
pub mod cli;
pub mod concordance;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
