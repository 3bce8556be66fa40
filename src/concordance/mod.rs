//! Lemma-based concordance: extraction, rendering, reporting, export.
//!
//! Everything in this module is a pure function over an already-annotated
//! [`Document`](crate::annotation::token::Document), except [`report::export`]
//! which performs the one scoped file write the system does.

pub mod extractor;
pub mod highlight;
pub mod report;
pub mod request;

pub use extractor::{MatchResult, NeighborRef, extract};
pub use highlight::render_highlighted;
pub use report::{export, format_report};
pub use request::{AnalysisOutcome, AnalysisRequest, DEFAULT_WINDOW};
