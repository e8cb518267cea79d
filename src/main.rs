//! Docmirror main entry point
//!
//! Command-line interface for the documentation mirror crawler.

use clap::Parser;
use docmirror::config::load_config;
use docmirror::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docmirror: mirror a documentation site into a local text corpus
///
/// Docmirror crawls every same-origin page reachable from a seed URL,
/// extracts the content region of each page, and writes it to a directory
/// tree mirroring the site's URL structure.
#[derive(Parser, Debug)]
#[command(name = "docmirror")]
#[command(version)]
#[command(about = "Mirror a documentation site into a local text corpus", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Run the crawler
    let summary = crawl(&config).await?;

    if summary.pages_failed > 0 {
        tracing::warn!(
            "{} of {} pages failed to download",
            summary.pages_failed,
            summary.pages_processed()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docmirror=info,warn"),
            1 => EnvFilter::new("docmirror=debug,info"),
            2 => EnvFilter::new("docmirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &docmirror::config::Config) {
    println!("=== Docmirror Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.base_url);
    println!("  Output directory: {}", config.crawler.output_dir);
    println!(
        "  Output format: {}",
        config.crawler.output_format.extension()
    );
    println!(
        "  Request delay: {}s",
        config.crawler.request_delay_seconds
    );
    println!(
        "  Fetch timeout: {}s",
        config.crawler.fetch_timeout_seconds
    );

    println!("\nMarkdown switches:");
    println!("  Ignore links: {}", config.markdown.ignore_links);
    println!("  Ignore images: {}", config.markdown.ignore_images);

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl {}", config.crawler.base_url);
}
