//! Crawler module for mirroring a documentation site
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with bounded timeouts
//! - The FIFO frontier and its dedup invariant
//! - Content extraction and same-origin link discovery
//! - The breadth-first crawl loop

mod engine;
mod extractor;
mod fetcher;
mod frontier;
mod links;

pub use engine::CrawlEngine;
pub use extractor::ContentExtractor;
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use links::discover_links;

pub use crate::output::CrawlSummary;

use crate::config::Config;
use crate::Result;

/// Runs a complete mirror crawl
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and seed the frontier from the configured URL
/// 2. Fetch pages breadth-first, one at a time, with the politeness delay
/// 3. Extract each page's content region and write it to the mirror tree
/// 4. Follow same-origin links until the frontier drains
///
/// # Arguments
///
/// * `config` - The validated crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed; counts of stored and failed pages
/// * `Err(MirrorError)` - Startup failure or fatal storage failure
pub async fn crawl(config: &Config) -> Result<CrawlSummary> {
    let mut engine = CrawlEngine::new(config)?;
    engine.run().await
}
