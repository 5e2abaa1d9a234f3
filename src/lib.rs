//! Workspace umbrella crate for Sealscan.
//!
//! Sealscan finds professional-engineer certification language ("sealed by
//! a licensed engineer", "PE stamp", ...) in construction specification
//! text, scores each hit, and labels it with the outline position it sits
//! under (`1.05-A-1-a`).
//!
//! This crate stitches the stage crates together so callers can analyze
//! whole documents through a single entry point:
//!
//! - `canonical`: index-preserving normalization and context windows
//! - `matcher`: keyword/pattern search and confidence scoring
//! - `section`: outline hierarchy tracking across pages
//!
//! ```
//! use sealscan::{DocumentAnalyzer, split_pages};
//!
//! let text = "1.05 SUBMITTALS\nA. Shop Drawings\nDrawings shall be sealed by the Engineer of Record.\x0c\
//!             Calculations stamped by a licensed engineer.";
//! let analyzer = DocumentAnalyzer::with_defaults()?;
//! let report = analyzer.analyze_document(&split_pages(text));
//!
//! assert_eq!(report.num_pages, 2);
//! assert_eq!(report.matched_pages(), 2);
//! assert!(report.records.iter().all(|r| r.section_code.as_deref() == Some("1.05-A")));
//! # Ok::<(), sealscan::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod metrics;
pub mod pages;
pub mod query;
pub mod record;

pub use canonical::{
    CanonicalError, CanonicalMapping, CanonicalizeConfig, ContextWindow, canonical_source,
    canonicalize, collapse_whitespace, context_window,
};
pub use matcher::{
    ConfidenceScorer, MatchConfig, MatchEngine, MatchError, MatchSpan, MatchType,
    ScoreBreakdown, ScoringConfig, Span, TermMatches,
};
pub use section::{SectionEntry, SectionResolver};

pub use crate::analyzer::{AnalysisConfig, DEFAULT_SNIPPET_WINDOW, DocumentAnalyzer};
pub use crate::config::{ConfigLoadError, SealscanConfig};
pub use crate::metrics::AnalysisMetrics;
pub use crate::pages::{assign_section_hints, section_hint, split_pages};
pub use crate::query::{RecordFilter, SortDirection, SortField, sort_records};
pub use crate::record::{DocumentReport, MatchRecord, PageAnalysis, PageText};

use thiserror::Error;

/// Errors raised while building an analyzer. Analysis itself never fails.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("canonicalization config: {0}")]
    Canonical(#[from] CanonicalError),

    #[error("match config: {0}")]
    Match(#[from] MatchError),
}
