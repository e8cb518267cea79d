use serde::Deserialize;

/// Main configuration structure for docmirror
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL; its host defines the crawl origin
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Root directory of the local mirror
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: String,

    /// Output format for extracted content
    #[serde(rename = "output-format", default)]
    pub output_format: OutputFormat,

    /// Politeness delay between requests, in seconds
    #[serde(rename = "request-delay-seconds", default = "default_request_delay")]
    pub request_delay_seconds: f64,

    /// Per-request timeout, in seconds
    #[serde(rename = "fetch-timeout-seconds", default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
}

/// Output format for extracted page content
///
/// Controls both the file extension the path mapper assigns and the
/// extraction mode (plain text vs. Markdown conversion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Md,
}

impl OutputFormat {
    /// Returns the file extension for this format (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }
}

/// Switches for the Markdown extraction mode
///
/// Ignored when the output format is plain text.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    /// Drop hyperlink targets, keeping only the link text
    #[serde(rename = "ignore-links", default)]
    pub ignore_links: bool,

    /// Drop embedded images entirely
    #[serde(rename = "ignore-images", default = "default_true")]
    pub ignore_images: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            ignore_links: false,
            ignore_images: true,
        }
    }
}

fn default_output_dir() -> String {
    "docs_mirror".to_string()
}

fn default_request_delay() -> f64 {
    0.1
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
