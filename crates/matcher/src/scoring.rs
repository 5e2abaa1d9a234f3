//! Heuristic confidence for a single match.
//!
//! A match starts from a base that depends on how it was found, gains a
//! little for every anchor term nearby, and loses a fixed amount when
//! exemption language sits in the same window.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{MatchError, MatchType};

/// Base confidence for a literal keyword hit.
pub const EXACT_BASE: f32 = 0.75;
/// Base confidence for a pattern hit.
pub const PATTERN_BASE: f32 = 0.85;
/// Added per distinct anchor found in the window.
pub const ANCHOR_BOOST: f32 = 0.05;
/// Ceiling on the cumulative anchor boost.
pub const MAX_ANCHOR_BOOST: f32 = 0.20;
/// Subtracted when any negation phrase is in the window.
pub const NEGATION_PENALTY: f32 = 0.10;
/// Default proximity radius in characters on each side of a match.
pub const DEFAULT_PROXIMITY_WINDOW: usize = 300;

/// Scoring vocabulary and window size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Terms whose presence near a match raises confidence.
    pub anchors: Vec<String>,
    /// Exemption phrases whose presence lowers confidence.
    pub negations: Vec<String>,
    /// Radius of the proximity window around a match, in characters.
    pub proximity_window: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let anchors = [
            "seal",
            "sealed",
            "stamp",
            "stamped",
            "calculations",
            "shop drawings",
            "licensed",
            "state",
        ];
        let negations = ["not required", "unless otherwise noted"];
        Self {
            anchors: anchors.iter().map(|s| s.to_string()).collect(),
            negations: negations.iter().map(|s| s.to_string()).collect(),
            proximity_window: DEFAULT_PROXIMITY_WINDOW,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.proximity_window == 0 {
            return Err(MatchError::InvalidConfig(
                "proximity_window must be greater than zero".into(),
            ));
        }
        if self.anchors.iter().any(|a| a.trim().is_empty()) {
            return Err(MatchError::InvalidConfig(
                "anchors must not contain blank entries".into(),
            ));
        }
        if self.negations.iter().any(|n| n.trim().is_empty()) {
            return Err(MatchError::InvalidConfig(
                "negations must not contain blank entries".into(),
            ));
        }
        Ok(())
    }
}

/// How a score was assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f32,
    /// Anchors found in the window, lowercased and sorted.
    pub anchors_found: Vec<String>,
    pub boost: f32,
    pub penalty: f32,
    /// `clamp(base + boost - penalty, 0, 1)`.
    pub score: f32,
}

/// Pure confidence function over normalized text.
///
/// Anchors are held as a lowercased set, so neither their order nor
/// duplicates in the configuration change a score.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    anchors: BTreeSet<String>,
    negations: Vec<String>,
    proximity_window: usize,
}

impl ConfidenceScorer {
    pub fn new(cfg: &ScoringConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self {
            anchors: cfg.anchors.iter().map(|a| a.to_lowercase()).collect(),
            negations: cfg.negations.iter().map(|n| n.to_lowercase()).collect(),
            proximity_window: cfg.proximity_window,
        })
    }

    pub fn proximity_window(&self) -> usize {
        self.proximity_window
    }

    /// Confidence in `[0.0, 1.0]` for the match at `[start, end)`.
    pub fn score(&self, normalized: &str, start: usize, end: usize, match_type: MatchType) -> f32 {
        self.explain(normalized, start, end, match_type).score
    }

    /// Same as [`score`](Self::score), keeping the intermediate terms.
    pub fn explain(
        &self,
        normalized: &str,
        start: usize,
        end: usize,
        match_type: MatchType,
    ) -> ScoreBreakdown {
        let base = match match_type {
            MatchType::Exact => EXACT_BASE,
            MatchType::Pattern => PATTERN_BASE,
        };

        let window =
            canonical::surrounding(normalized, start, end, self.proximity_window).to_lowercase();

        let anchors_found: Vec<String> = self
            .anchors
            .iter()
            .filter(|anchor| window.contains(anchor.as_str()))
            .cloned()
            .collect();
        let boost = (anchors_found.len() as f32 * ANCHOR_BOOST).min(MAX_ANCHOR_BOOST);

        let penalty = if self.negations.iter().any(|n| window.contains(n.as_str())) {
            NEGATION_PENALTY
        } else {
            0.0
        };

        ScoreBreakdown {
            base,
            anchors_found,
            boost,
            penalty,
            score: (base + boost - penalty).clamp(0.0, 1.0),
        }
    }
}
