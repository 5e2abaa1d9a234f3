use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a term was matched.
///
/// Serialized as `"exact"` / `"regex"`, the values API consumers already
/// filter on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchType {
    /// Case-insensitive literal phrase.
    #[serde(rename = "exact")]
    Exact,
    /// Case-insensitive regular expression.
    #[serde(rename = "regex")]
    Pattern,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Pattern => "regex",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = MatchError;

    /// Accepts the wire names plus `pattern`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchType::Exact),
            "regex" | "pattern" => Ok(MatchType::Pattern),
            other => Err(MatchError::InvalidConfig(format!(
                "unknown match type {other:?}, expected \"exact\" or \"regex\""
            ))),
        }
    }
}

/// Half-open byte range `[start, end)` into the normalized text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A single occurrence of a configured term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'a> {
    pub keyword_or_pattern: &'a str,
    pub match_type: MatchType,
    pub start: usize,
    pub end: usize,
}

/// Every occurrence of one configured term, in text order.
///
/// The engine never produces a `TermMatches` with empty `positions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermMatches {
    /// The keyword or regex source exactly as configured.
    pub term: String,
    pub match_type: MatchType,
    pub positions: Vec<Span>,
}

impl TermMatches {
    /// Flatten into one [`MatchSpan`] per position.
    pub fn spans(&self) -> impl Iterator<Item = MatchSpan<'_>> + '_ {
        self.positions.iter().map(move |span| MatchSpan {
            keyword_or_pattern: &self.term,
            match_type: self.match_type,
            start: span.start,
            end: span.end,
        })
    }
}

/// Search vocabulary for the match engine.
///
/// Both lists are static configuration supplied at construction. The
/// defaults are the professional-engineer certification vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchConfig {
    /// Literal phrases, matched case-insensitively.
    pub keywords: Vec<String>,
    /// Regular expressions, compiled case-insensitively.
    pub patterns: Vec<String>,
}

impl MatchConfig {
    /// Phrases and patterns that signal a professional engineer's seal or
    /// stamp requirement.
    pub fn professional_engineer() -> Self {
        let keywords = [
            "Professional Engineer",
            "Registered Engineer",
            "Civil Engineer",
            "Structural Engineer",
            "Civil or Structural Engineer",
            "Stamped by",
            "Sealed by",
            "Licensed Engineer",
            "Engineer of Record",
            "PE seal",
        ];
        let patterns = [
            r"\bprofessional\s+engineer(s)?\b",
            r"\bregistered\s+engineer(s)?\b",
            r"\b(structural|civil)\s+engineer(s)?\b",
            r"\b(seal(ed)?|stamp(ed)?)\s+by\b",
            r"\bengineer\s+of\s+record\b",
            r"\blicensed\s+engineer(s)?\b",
            r"\bpe\s+(seal|stamp|registration)\b",
        ];
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Structural checks: no blank terms, no duplicates within a list.
    ///
    /// Regex syntax is checked when the engine compiles the patterns; see
    /// [`MatchEngine::new`](crate::MatchEngine::new).
    pub fn validate(&self) -> Result<(), MatchError> {
        check_terms("keywords", &self.keywords)?;
        check_terms("patterns", &self.patterns)
    }
}

fn check_terms(field: &str, terms: &[String]) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(terms.len());
    for term in terms {
        if term.trim().is_empty() {
            return Err(MatchError::InvalidConfig(format!(
                "{field} must not contain blank entries"
            )));
        }
        if !seen.insert(term.as_str()) {
            return Err(MatchError::InvalidConfig(format!(
                "{field} contains duplicate entry {term:?}"
            )));
        }
    }
    Ok(())
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig::professional_engineer()
    }
}

/// Errors produced by the matching layer.
///
/// Only configuration can fail; searching text never does.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid vocabulary or scoring configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// A configured regular expression failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
