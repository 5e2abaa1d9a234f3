use std::sync::Arc;
use std::time::{Duration, Instant};

/// Observer for page and document analysis.
///
/// Attached per analyzer with
/// [`DocumentAnalyzer::with_metrics`](crate::DocumentAnalyzer::with_metrics).
pub trait AnalysisMetrics: Send + Sync {
    fn record_page(&self, page: u32, latency: Duration, matches: usize);
    fn record_document(&self, latency: Duration, pages: usize, matches: usize);
}

/// Times one unit of work when a recorder is attached.
pub(crate) struct MetricsSpan {
    recorder: Arc<dyn AnalysisMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start(recorder: Option<&Arc<dyn AnalysisMetrics>>) -> Option<Self> {
        recorder.map(|recorder| Self {
            recorder: Arc::clone(recorder),
            start: Instant::now(),
        })
    }

    pub(crate) fn record_page(self, page: u32, matches: usize) {
        self.recorder
            .record_page(page, self.start.elapsed(), matches);
    }

    /// Reports `latency` instead of the span's own clock so the recorder
    /// and the report agree on the document time.
    pub(crate) fn record_document(self, latency: Duration, pages: usize, matches: usize) {
        self.recorder.record_document(latency, pages, matches);
    }
}
