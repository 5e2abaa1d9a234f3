//! # Sealscan Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` finds certification language in normalized page text and says
//! how much to trust each hit. It works on the `normalized` string produced
//! by `canonical`; offsets it returns are byte offsets into that string.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: the search vocabulary, literal keywords plus regular
//!   expressions. Defaults to the professional-engineer vocabulary.
//! - [`MatchEngine`]: compiled vocabulary. [`MatchEngine::find_matches`]
//!   returns one [`TermMatches`] per term that occurs, in config order.
//! - [`ScoringConfig`] / [`ConfidenceScorer`]: proximity scoring with anchor
//!   boosts and a negation penalty. [`ConfidenceScorer::explain`] returns the
//!   full [`ScoreBreakdown`].
//! - [`MatchType`]: `Exact` or `Pattern`, serialized as `"exact"` / `"regex"`.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{ConfidenceScorer, MatchConfig, MatchEngine, ScoringConfig};
//!
//! let engine = MatchEngine::new(&MatchConfig::default())?;
//! let scorer = ConfidenceScorer::new(&ScoringConfig::default())?;
//!
//! let text = "Shop drawings shall be sealed by a Professional Engineer.";
//! for term in engine.find_matches(text) {
//!     for span in term.spans() {
//!         let confidence = scorer.score(text, span.start, span.end, span.match_type);
//!         assert!((0.0..=1.0).contains(&confidence));
//!     }
//! }
//! # Ok::<(), matcher::MatchError>(())
//! ```
//!
//! ## Error Handling
//!
//! Only construction fails. [`MatchError::InvalidPattern`] reports a regex
//! that does not compile; [`MatchError::InvalidConfig`] covers blank or
//! duplicate terms and bad scoring settings. Searching and scoring accept
//! any string.

pub mod engine;
pub mod scoring;
pub mod types;

pub use engine::MatchEngine;
pub use scoring::{
    ConfidenceScorer, ScoreBreakdown, ScoringConfig, ANCHOR_BOOST, DEFAULT_PROXIMITY_WINDOW,
    EXACT_BASE, MAX_ANCHOR_BOOST, NEGATION_PENALTY, PATTERN_BASE,
};
pub use types::{MatchConfig, MatchError, MatchSpan, MatchType, Span, TermMatches};
