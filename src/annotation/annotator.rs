//! Core annotator trait definition.
//!
//! This module defines the [`Annotator`] trait, the seam between the
//! concordance extractor and whatever performs the actual linguistic
//! analysis. An annotator converts raw text into a [`Document`] of tokens
//! that each carry a surface form, a lemma, and a dependency label.
//!
//! The built-in [`EnglishAnnotator`](super::english::EnglishAnnotator) is a
//! lightweight rule-based implementation; bindings to heavier NLP stacks can
//! plug in behind the same trait without touching the extractor.
//!
//! # Examples
//!
//! Implementing a custom annotator:
//!
//! ```
//! use concord::annotation::annotator::Annotator;
//! use concord::annotation::token::Document;
//! use concord::error::Result;
//!
//! struct MyAnnotator;
//!
//! impl Annotator for MyAnnotator {
//!     fn annotate(&self, _text: &str) -> Result<Document> {
//!         Ok(Document::empty())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_annotator"
//!     }
//! }
//! ```

use crate::annotation::token::Document;
use crate::error::Result;

/// Trait for annotators that convert raw text into annotated documents.
///
/// Implementations must guarantee:
///
/// - token positions are 0-based, unique, and contiguous,
/// - every token carries a lemma and a dependency label,
/// - output is deterministic for identical input.
///
/// The trait requires `Send + Sync` so annotators can be shared across
/// thread boundaries.
pub trait Annotator: Send + Sync {
    /// Annotate the given text and return the resulting document.
    ///
    /// A failure here (for example, a required resource that could not be
    /// loaded) aborts the current request only; it carries a corrective
    /// message for the user.
    fn annotate(&self, text: &str) -> Result<Document>;

    /// Get the name of this annotator (for debugging and configuration).
    fn name(&self) -> &'static str;
}
