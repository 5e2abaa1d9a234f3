use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::types::{MatchConfig, MatchError, MatchType, Span, TermMatches};


/// One configured term compiled into a case-insensitive regex.
#[derive(Debug, Clone)]
struct CompiledTerm {
    term: String,
    match_type: MatchType,
    regex: Regex,
}

/// Keyword and pattern search over normalized page text.
///
/// Built once from a [`MatchConfig`]; searching is read-only, so one engine
/// can be shared across threads and documents.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    terms: Vec<CompiledTerm>,
}

impl MatchEngine {
    /// Validate the vocabulary and compile every term.
    ///
    /// A malformed pattern fails here, at configuration time, with
    /// [`MatchError::InvalidPattern`]. A pattern that matches the empty
    /// string is rejected as [`MatchError::InvalidConfig`].
    pub fn new(cfg: &MatchConfig) -> Result<Self, MatchError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "match_config_rejected");
            return Err(err);
        }

        let mut terms = Vec::with_capacity(cfg.keywords.len() + cfg.patterns.len());
        for keyword in &cfg.keywords {
            // Escaped, so compilation of a literal cannot fail on syntax.
            let regex = compile(&regex::escape(keyword), keyword)?;
            terms.push(CompiledTerm {
                term: keyword.clone(),
                match_type: MatchType::Exact,
                regex,
            });
        }
        for pattern in &cfg.patterns {
            let regex = match compile(pattern, pattern) {
                Ok(regex) if regex.is_match("") => {
                    warn!(pattern = %pattern, "match_pattern_rejected");
                    return Err(MatchError::InvalidConfig(format!(
                        "pattern {pattern:?} matches the empty string"
                    )));
                }
                Ok(regex) => regex,
                Err(err) => {
                    warn!(error = %err, "match_pattern_rejected");
                    return Err(err);
                }
            };
            terms.push(CompiledTerm {
                term: pattern.clone(),
                match_type: MatchType::Pattern,
                regex,
            });
        }

        debug!(
            keywords = cfg.keywords.len(),
            patterns = cfg.patterns.len(),
            "match_engine_ready"
        );
        Ok(Self { terms })
    }

    /// Engine over the default professional-engineer vocabulary.
    pub fn professional_engineer() -> Result<Self, MatchError> {
        Self::new(&MatchConfig::professional_engineer())
    }

    /// Number of compiled terms (keywords plus patterns).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Configured terms in search order: keywords first, then patterns.
    pub fn terms(&self) -> impl Iterator<Item = (&str, MatchType)> + '_ {
        self.terms.iter().map(|t| (t.term.as_str(), t.match_type))
    }

    /// Find every occurrence of every term, grouped by term.
    ///
    /// - Occurrences of one term never overlap: the scan resumes at the end
    ///   of the previous match (leftmost-first).
    /// - Occurrences of different terms may overlap freely.
    /// - Terms with no occurrence are left out.
    ///
    /// Output order is configuration order; positions are in text order.
    pub fn find_matches(&self, normalized: &str) -> Vec<TermMatches> {
        let mut results = Vec::new();
        if normalized.is_empty() {
            return results;
        }

        for term in &self.terms {
            let positions: Vec<Span> = term
                .regex
                .find_iter(normalized)
                // Zero-width matches carry no evidence and cannot be located.
                .filter(|m| m.start() < m.end())
                .map(|m| Span::new(m.start(), m.end()))
                .collect();
            if !positions.is_empty() {
                results.push(TermMatches {
                    term: term.term.clone(),
                    match_type: term.match_type,
                    positions,
                });
            }
        }

        results
    }
}

fn compile(source: &str, term: &str) -> Result<Regex, MatchError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source| MatchError::InvalidPattern {
            pattern: term.to_string(),
            source,
        })
}
