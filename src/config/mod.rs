//! Configuration module for docmirror
//!
//! Configuration is a small TOML file naming the seed URL, the output
//! directory and format, and the politeness delay. Loading validates
//! eagerly; a bad configuration never starts a crawl.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, MarkdownConfig, OutputFormat};
