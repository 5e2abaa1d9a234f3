//! Filtering and ordering of match records for presentation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use matcher::MatchType;
use serde::{Deserialize, Serialize};

use crate::record::MatchRecord;

/// Criteria a record must meet; unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordFilter {
    /// Case-insensitive substring of the record's keyword or snippet.
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub match_type: Option<MatchType>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.keyword.as_deref().is_none_or(str::is_empty)
            && self.page.is_none()
            && self.match_type.is_none()
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        let keyword_ok = match self.keyword.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                record.keyword.to_lowercase().contains(&needle)
                    || record.snippet.to_lowercase().contains(&needle)
            }
        };
        keyword_ok
            && self.page.is_none_or(|page| record.page == page)
            && self.match_type.is_none_or(|mt| record.match_type == mt)
    }

    /// Records that pass, in their original order.
    pub fn apply<'a>(&self, records: &'a [MatchRecord]) -> Vec<&'a MatchRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Keyword, case-insensitive.
    Keyword,
    Page,
    Confidence,
    MatchType,
    /// Section code; records without one come first.
    SectionCode,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Keyword => "keyword",
            SortField::Page => "page",
            SortField::Confidence => "confidence",
            SortField::MatchType => "match_type",
            SortField::SectionCode => "section_code",
        }
    }

    fn compare(&self, a: &MatchRecord, b: &MatchRecord) -> Ordering {
        match self {
            SortField::Keyword => a.keyword.to_lowercase().cmp(&b.keyword.to_lowercase()),
            SortField::Page => a.page.cmp(&b.page),
            SortField::Confidence => a.confidence.total_cmp(&b.confidence),
            SortField::MatchType => a.match_type.cmp(&b.match_type),
            SortField::SectionCode => a.section_code.cmp(&b.section_code),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "keyword" => Ok(SortField::Keyword),
            "page" => Ok(SortField::Page),
            "confidence" => Ok(SortField::Confidence),
            "match_type" => Ok(SortField::MatchType),
            "section_code" | "section" => Ok(SortField::SectionCode),
            other => Err(format!(
                "unknown sort field {other:?}; expected keyword, page, confidence, match_type or section_code"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort: records that compare equal keep their relative order in
/// either direction.
pub fn sort_records(records: &mut [MatchRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ord = field.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
