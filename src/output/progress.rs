//! Progress reporting for the crawl
//!
//! The reporter observes engine events and keeps running counts for the
//! console progress lines and the final summary. It never influences
//! control flow: the engine works the same with its output discarded.

use std::path::Path;
use url::Url;

/// Final accounting of a completed crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages fetched, extracted, and written to the mirror
    pub pages_stored: usize,

    /// Pages abandoned after a fetch failure
    pub pages_failed: usize,
}

impl CrawlSummary {
    /// Total URLs processed, successful or not
    pub fn pages_processed(&self) -> usize {
        self.pages_stored + self.pages_failed
    }
}

/// Emits human-readable progress lines and accumulates the summary
#[derive(Debug, Default)]
pub struct ProgressReporter {
    stored: usize,
    failed: usize,
}

impl ProgressReporter {
    /// Creates a reporter with zeroed counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page successfully stored
    ///
    /// `total_known` is the frontier's count of URLs ever enqueued; the pair
    /// `processed/total_known` is the console progress indicator.
    pub fn record_stored(&mut self, url: &Url, path: &Path, total_known: usize) {
        self.stored += 1;
        tracing::info!(
            "[{}/{}] Saved: {} -> {}",
            self.processed(),
            total_known,
            url,
            path.display()
        );
    }

    /// Records a page abandoned after a fetch failure
    ///
    /// One line identifying the URL and the cause; the crawl continues.
    pub fn record_failed(&mut self, url: &Url, cause: &str, total_known: usize) {
        self.failed += 1;
        tracing::error!(
            "[{}/{}] Failed: {}: {}",
            self.processed(),
            total_known,
            url,
            cause
        );
    }

    /// URLs processed so far, successful or not
    pub fn processed(&self) -> usize {
        self.stored + self.failed
    }

    /// Logs the final summary and returns it
    pub fn finish(&self) -> CrawlSummary {
        let summary = CrawlSummary {
            pages_stored: self.stored,
            pages_failed: self.failed,
        };
        tracing::info!(
            "Crawl complete: {} pages saved, {} failed",
            summary.pages_stored,
            summary.pages_failed
        );
        summary
    }
}
