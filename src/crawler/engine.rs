//! Crawl engine - the main crawl loop
//!
//! The engine drives the whole crawl: pull a URL from the frontier, fetch
//! it, extract its content region, persist it, discover its same-origin
//! links, and enqueue the unseen ones. Per-page failures are isolated so
//! one bad page never aborts the crawl; only a storage failure is fatal.

use crate::config::{Config, OutputFormat};
use crate::crawler::extractor::ContentExtractor;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::frontier::Frontier;
use crate::crawler::links::discover_links;
use crate::output::{map_url_to_path, CrawlSummary, PageStore, ProgressReporter};
use crate::url::normalize_url;
use crate::Result;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Breadth-first crawl engine over a single origin
///
/// Owns the frontier (sole mutator) and the control loop. The per-URL
/// lifecycle is fetch, then either extract-and-store or abandon; failed
/// URLs are never re-queued (zero-retry policy).
pub struct CrawlEngine {
    client: Client,
    seed: Url,
    output_dir: PathBuf,
    format: OutputFormat,
    request_delay: Duration,
    frontier: Frontier,
    extractor: ContentExtractor,
    store: PageStore,
    progress: ProgressReporter,
}

impl CrawlEngine {
    /// Creates an engine from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Ready to run
    /// * `Err(MirrorError)` - Seed URL rejected or HTTP client build failed
    pub fn new(config: &Config) -> Result<Self> {
        let seed = normalize_url(&config.crawler.base_url)?;
        let client = build_http_client(config.crawler.fetch_timeout_seconds)?;
        let extractor =
            ContentExtractor::new(config.crawler.output_format, config.markdown.clone());

        Ok(Self {
            client,
            seed,
            output_dir: PathBuf::from(&config.crawler.output_dir),
            format: config.crawler.output_format,
            request_delay: Duration::from_secs_f64(config.crawler.request_delay_seconds),
            frontier: Frontier::new(),
            extractor,
            store: PageStore::new(),
            progress: ProgressReporter::new(),
        })
    }

    /// Runs the crawl to completion
    ///
    /// The loop terminates when the frontier drains: the origin's URL space
    /// is finite and the frontier never re-admits a URL it has seen, so the
    /// crawl always ends.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - Pages stored and failed
    /// * `Err(MirrorError)` - A storage failure made the output unusable
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        tracing::info!(
            "Starting mirror of {} into {}",
            self.seed,
            self.output_dir.display()
        );

        self.frontier.seed(self.seed.clone());

        let mut first = true;
        while let Some(url) = self.frontier.next() {
            // Politeness throttle: fixed delay between fetches
            if !first && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
            first = false;

            self.process_url(&url).await?;
        }

        Ok(self.progress.finish())
    }

    /// Fetches one URL and, on success, stores its content and enqueues its
    /// unseen same-origin links
    ///
    /// Fetch failures of any kind are reported and swallowed here; only
    /// storage errors propagate.
    async fn process_url(&mut self, url: &Url) -> Result<()> {
        match fetch_url(&self.client, url.as_str()).await {
            FetchResult::Success { body, .. } => {
                // Extraction and link discovery consume the same fetched body
                let text = self.extractor.extract(url.as_str(), &body);
                let path = map_url_to_path(url, self.format, &self.output_dir);
                self.store.store(&path, &text)?;

                for link in discover_links(url, &body, &self.seed) {
                    self.frontier.try_claim(link);
                }

                self.progress.record_stored(url, &path, self.frontier.total());
            }
            failure => {
                let cause = failure
                    .failure_cause()
                    .unwrap_or_else(|| "unknown".to_string());
                self.progress.record_failed(url, &cause, self.frontier.total());
            }
        }

        Ok(())
    }
}
