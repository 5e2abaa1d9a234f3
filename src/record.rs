//! Per-match output records and the document report.

use std::collections::BTreeSet;

use matcher::{MatchType, Span};
use section::SectionEntry;
use serde::{Deserialize, Serialize};

/// One page of extracted text, as handed over by the text provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number.
    pub page: u32,
    pub text: String,
    /// Best-effort label from the provider, passed through untouched.
    #[serde(default)]
    pub section_hint: Option<String>,
}

impl PageText {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
            section_hint: None,
        }
    }

    pub fn with_section_hint(mut self, hint: impl Into<String>) -> Self {
        self.section_hint = Some(hint.into());
        self
    }
}

/// A located, scored match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    /// The keyword or pattern source that matched.
    pub keyword: String,
    pub match_type: MatchType,
    pub page: u32,
    pub section_hint: Option<String>,
    /// Outline position such as `1.05-A-1-a`, if one was in effect.
    pub section_code: Option<String>,
    pub snippet: String,
    pub context_before: String,
    pub context_after: String,
    /// `context_before + snippet + context_after`.
    pub context_window: String,
    pub confidence: f32,
    /// Byte span in the page's normalized text.
    pub positions: Vec<Span>,
    pub proximity_window: usize,
}

/// Result of analyzing one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnalysis {
    pub page: u32,
    pub records: Vec<MatchRecord>,
    /// Hierarchy at the end of the page; seeds the next page.
    pub tail_state: Option<SectionEntry>,
}

/// All records of one document, in page order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentReport {
    pub num_pages: usize,
    /// Wall-clock analysis time in whole milliseconds.
    #[serde(default)]
    pub parse_time_ms: u64,
    pub records: Vec<MatchRecord>,
}

impl DocumentReport {
    /// Number of distinct pages with at least one record.
    pub fn matched_pages(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.page)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn total_matches(&self) -> usize {
        self.records.len()
    }
}
