//! Page and document analysis.
//!
//! A page goes through canonicalization, matching, scoring and section
//! resolution. A document is a fold over its pages: each page's resolver is
//! seeded with the tail state of the page before it, so pages of one
//! document are always processed in order. Independent documents share
//! nothing and may run in parallel.

use std::sync::Arc;
use std::time::Instant;

use canonical::{canonicalize, context_window, CanonicalizeConfig};
use matcher::{ConfidenceScorer, MatchConfig, MatchEngine, ScoringConfig, Span};
use section::{SectionEntry, SectionResolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Level};

use crate::metrics::{AnalysisMetrics, MetricsSpan};
use crate::record::{DocumentReport, MatchRecord, PageAnalysis, PageText};
use crate::AnalysisError;

/// Default radius, in characters, of the snippet context on each side of a
/// match.
pub const DEFAULT_SNIPPET_WINDOW: usize = 400;

/// Configuration for every stage of the analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub canonical: CanonicalizeConfig,
    pub matcher: MatchConfig,
    pub scoring: ScoringConfig,
    /// Characters of context kept before and after each match.
    pub snippet_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            canonical: CanonicalizeConfig::default(),
            matcher: MatchConfig::default(),
            scoring: ScoringConfig::default(),
            snippet_window: DEFAULT_SNIPPET_WINDOW,
        }
    }
}

/// Turns page text into match records.
///
/// Construction validates and compiles the whole configuration; analysis
/// itself never fails.
#[derive(Clone)]
pub struct DocumentAnalyzer {
    canonical: CanonicalizeConfig,
    engine: MatchEngine,
    scorer: ConfidenceScorer,
    snippet_window: usize,
    metrics: Option<Arc<dyn AnalysisMetrics>>,
}

impl std::fmt::Debug for DocumentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAnalyzer")
            .field("canonical", &self.canonical)
            .field("terms", &self.engine.len())
            .field("snippet_window", &self.snippet_window)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl DocumentAnalyzer {
    pub fn new(cfg: &AnalysisConfig) -> Result<Self, AnalysisError> {
        cfg.canonical.validate()?;
        let engine = MatchEngine::new(&cfg.matcher)?;
        let scorer = ConfidenceScorer::new(&cfg.scoring)?;
        Ok(Self {
            canonical: cfg.canonical.clone(),
            engine,
            scorer,
            snippet_window: cfg.snippet_window,
            metrics: None,
        })
    }

    /// Analyzer over the professional-engineer vocabulary and default
    /// windows.
    pub fn with_defaults() -> Result<Self, AnalysisError> {
        Self::new(&AnalysisConfig::default())
    }

    /// Report page and document latencies to `recorder`.
    pub fn with_metrics(mut self, recorder: Arc<dyn AnalysisMetrics>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn scorer(&self) -> &ConfidenceScorer {
        &self.scorer
    }

    /// Analyze one page, continuing the outline from `seed`.
    ///
    /// Emits one record per match position, grouped by term in
    /// configuration order and by position within a term.
    pub fn analyze_page(&self, page: &PageText, seed: Option<&SectionEntry>) -> PageAnalysis {
        let metrics = MetricsSpan::start(self.metrics.as_ref());
        let start = Instant::now();

        let mapping = canonicalize(&page.text, &self.canonical);
        let resolver = SectionResolver::new(&mapping.canonical_source, seed);
        let normalized = mapping.normalized.as_str();
        let section_hint = page.section_hint.clone().filter(|h| !h.is_empty());
        let proximity_window = self.scorer.proximity_window();

        let mut records = Vec::new();
        for term in self.engine.find_matches(normalized) {
            for span in term.spans() {
                let confidence = self
                    .scorer
                    .score(normalized, span.start, span.end, span.match_type);
                let window = context_window(
                    normalized,
                    span.start,
                    span.end,
                    self.snippet_window,
                    self.snippet_window,
                );
                // Match starts are always inside the normalized text, so the
                // map has an entry for them.
                let source_index = mapping.index_map[span.start];

                records.push(MatchRecord {
                    keyword: span.keyword_or_pattern.to_string(),
                    match_type: span.match_type,
                    page: page.page,
                    section_hint: section_hint.clone(),
                    section_code: resolver.resolve(source_index),
                    snippet: window.snippet.to_string(),
                    context_before: window.before.to_string(),
                    context_after: window.after.to_string(),
                    context_window: window.joined(),
                    confidence,
                    positions: vec![Span::new(span.start, span.end)],
                    proximity_window,
                });
            }
        }

        let elapsed_micros = start.elapsed().as_micros();
        debug!(
            page = page.page,
            normalized_len = normalized.len(),
            matches = records.len(),
            elapsed_micros,
            "page_analyzed"
        );
        if let Some(timer) = metrics {
            timer.record_page(page.page, records.len());
        }

        PageAnalysis {
            page: page.page,
            records,
            tail_state: resolver.into_tail_state(),
        }
    }

    /// Analyze a document's pages in the order given.
    ///
    /// Page numbers are expected to increase; a page that does not is
    /// logged and still processed in sequence.
    pub fn analyze_document(&self, pages: &[PageText]) -> DocumentReport {
        let metrics = MetricsSpan::start(self.metrics.as_ref());
        let start = Instant::now();

        let span = tracing::span!(
            Level::INFO,
            "sealscan.analyze_document",
            pages = pages.len()
        );
        let _guard = span.enter();

        let mut seed: Option<SectionEntry> = None;
        let mut previous_page: Option<u32> = None;
        let mut records = Vec::new();

        for page in pages {
            if previous_page.is_some_and(|prev| page.page <= prev) {
                warn!(
                    page = page.page,
                    previous = ?previous_page,
                    "page_out_of_order"
                );
            }
            previous_page = Some(page.page);

            let analysis = self.analyze_page(page, seed.as_ref());
            seed = analysis.tail_state;
            records.extend(analysis.records);
        }

        let elapsed = start.elapsed();
        let report = DocumentReport {
            num_pages: pages.len(),
            parse_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            records,
        };

        info!(
            pages = report.num_pages,
            matches = report.total_matches(),
            matched_pages = report.matched_pages(),
            elapsed_micros = elapsed.as_micros(),
            "document_analyzed"
        );
        if let Some(timer) = metrics {
            timer.record_document(elapsed, report.num_pages, report.total_matches());
        }

        report
    }

    /// Analyze independent documents, in parallel when the `parallel`
    /// feature is enabled. Reports come back in input order.
    pub fn analyze_documents<D>(&self, documents: &[D]) -> Vec<DocumentReport>
    where
        D: AsRef<[PageText]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            documents
                .par_iter()
                .map(|doc| self.analyze_document(doc.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.analyze_document(doc.as_ref()))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::MatchType;
    use std::sync::Mutex;
    use std::time::Duration;

    const SUBMITTALS: &str = "1.05 SUBMITTALS\nA. Action Submittals\n1. Product Data\na. Manufacturer datasheets\nEngineer of Record shall stamp.";

    fn analyzer() -> DocumentAnalyzer {
        DocumentAnalyzer::with_defaults().expect("default analyzer")
    }

    #[test]
    fn page_records_carry_section_code() {
        let analysis = analyzer().analyze_page(&PageText::new(1, SUBMITTALS), None);

        let exact = analysis
            .records
            .iter()
            .find(|r| r.keyword == "Engineer of Record")
            .expect("exact match");
        assert_eq!(exact.match_type, MatchType::Exact);
        assert_eq!(exact.section_code.as_deref(), Some("1.05-A-1-a"));
        assert_eq!(exact.snippet, "Engineer of Record");
        assert_eq!(exact.proximity_window, 300);
        assert_eq!(
            exact.context_window,
            format!("{}{}{}", exact.context_before, exact.snippet, exact.context_after)
        );

        let pattern = analysis
            .records
            .iter()
            .find(|r| r.match_type == MatchType::Pattern && r.snippet == "Engineer of Record")
            .expect("pattern match");
        assert!(pattern.confidence > exact.confidence);
        assert!(analysis.tail_state.is_some());
    }

    #[test]
    fn one_record_per_position() {
        let cfg = AnalysisConfig {
            matcher: MatchConfig {
                keywords: vec!["Sealed by".into()],
                patterns: vec![],
            },
            ..AnalysisConfig::default()
        };
        let analyzer = DocumentAnalyzer::new(&cfg).expect("analyzer");
        let analysis = analyzer.analyze_page(&PageText::new(1, "Sealed by Sealed by"), None);

        let spans: Vec<Span> = analysis
            .records
            .iter()
            .flat_map(|r| r.positions.clone())
            .collect();
        assert_eq!(spans, vec![Span::new(0, 9), Span::new(10, 19)]);
    }

    #[test]
    fn snippet_window_is_clamped() {
        let cfg = AnalysisConfig {
            snippet_window: 4,
            ..AnalysisConfig::default()
        };
        let analyzer = DocumentAnalyzer::new(&cfg).expect("analyzer");
        let page = PageText::new(1, "drawings  sealed by\n\nthe engineer");
        let record = analyzer
            .analyze_page(&page, None)
            .records
            .into_iter()
            .find(|r| r.keyword == "Sealed by")
            .expect("record");

        assert_eq!(record.context_before, "ngs ");
        assert_eq!(record.snippet, "sealed by");
        assert_eq!(record.context_after, " the");
    }

    #[test]
    fn empty_page_has_no_records() {
        let analysis = analyzer().analyze_page(&PageText::new(1, ""), None);
        assert!(analysis.records.is_empty());
        assert!(analysis.tail_state.is_none());
    }

    #[test]
    fn blank_section_hint_is_dropped() {
        let page = PageText::new(1, "Sealed by the engineer").with_section_hint("");
        let analysis = analyzer().analyze_page(&page, None);
        assert!(analysis.records.iter().all(|r| r.section_hint.is_none()));
    }

    #[test]
    fn invalid_pattern_rejected_at_construction() {
        let cfg = AnalysisConfig {
            matcher: MatchConfig {
                keywords: vec![],
                patterns: vec!["(".into()],
            },
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            DocumentAnalyzer::new(&cfg),
            Err(AnalysisError::Match(_))
        ));
    }

    #[derive(Default)]
    struct RecordingMetrics {
        pages: Mutex<Vec<(u32, usize)>>,
        documents: Mutex<Vec<(usize, usize)>>,
        document_latency: Mutex<Option<Duration>>,
    }

    impl AnalysisMetrics for RecordingMetrics {
        fn record_page(&self, page: u32, _latency: Duration, matches: usize) {
            self.pages.lock().unwrap().push((page, matches));
        }

        fn record_document(&self, latency: Duration, pages: usize, matches: usize) {
            self.documents.lock().unwrap().push((pages, matches));
            *self.document_latency.lock().unwrap() = Some(latency);
        }
    }

    #[test]
    fn metrics_see_every_page_and_document() {
        let metrics = Arc::new(RecordingMetrics::default());
        let analyzer = analyzer().with_metrics(metrics.clone());
        let pages = vec![
            PageText::new(1, "no matches here"),
            PageText::new(2, "Sealed by the Engineer of Record"),
        ];

        let report = analyzer.analyze_document(&pages);

        let seen_pages = metrics.pages.lock().unwrap().clone();
        assert_eq!(seen_pages.len(), 2);
        assert_eq!(seen_pages[0], (1, 0));
        assert_eq!(seen_pages[1].0, 2);
        assert_eq!(
            metrics.documents.lock().unwrap().as_slice(),
            &[(2, report.total_matches())]
        );
    }

    #[test]
    fn report_carries_parse_time() {
        let metrics = Arc::new(RecordingMetrics::default());
        let analyzer = analyzer().with_metrics(metrics.clone());
        let pages: Vec<PageText> = (1..=40)
            .map(|n| PageText::new(n, SUBMITTALS.repeat(20)))
            .collect();

        let report = analyzer.analyze_document(&pages);

        let latency = metrics
            .document_latency
            .lock()
            .unwrap()
            .expect("document latency recorded");
        assert_eq!(report.parse_time_ms, latency.as_millis() as u64);

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["parse_time_ms"], report.parse_time_ms);
    }

    #[test]
    fn windows_count_characters_in_accented_text() {
        let text = format!("licensed {} Engineer of Record", "\u{e9}".repeat(200));
        let analysis = analyzer().analyze_page(&PageText::new(1, text.as_str()), None);
        let record = analysis
            .records
            .iter()
            .find(|r| r.keyword == "Engineer of Record")
            .expect("exact match");

        // The anchor 210 characters back is inside the 300-character window.
        assert!((record.confidence - 0.80).abs() < 1e-5);
        // The whole 210-character prefix fits in the 400-character snippet
        // radius even though it spans 410 bytes.
        assert_eq!(record.context_before.chars().count(), 210);
        assert!(record.context_before.starts_with("licensed "));
        // Positions stay byte offsets into the normalized text.
        assert_eq!(record.positions[0], Span::new(410, 428));
    }
}
