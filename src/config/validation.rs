use crate::config::types::{Config, CrawlerConfig};
use crate::config::OutputFormat;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Any error returned here is fatal at startup: the crawl does not begin.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_output_format(config.crawler.output_format)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // Seed URL must parse, use http(s), and carry a host
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' has no host",
            config.base_url
        )));
    }

    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    if !config.request_delay_seconds.is_finite() || config.request_delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "request-delay-seconds must be a finite value >= 0, got {}",
            config.request_delay_seconds
        )));
    }

    if config.fetch_timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-seconds must be >= 1, got {}",
            config.fetch_timeout_seconds
        )));
    }

    Ok(())
}

/// Validates that the requested output format is available in this build
///
/// Markdown conversion lives behind the `markdown` cargo feature. Requesting
/// `md` without it must fail here rather than silently falling back to plain
/// text mid-crawl.
fn validate_output_format(format: OutputFormat) -> Result<(), ConfigError> {
    if format == OutputFormat::Md && !cfg!(feature = "markdown") {
        return Err(ConfigError::Validation(
            "output-format 'md' requires docmirror to be built with the 'markdown' feature"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::MarkdownConfig;

    fn create_test_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                base_url: "https://docs.example.com/".to_string(),
                output_dir: "docs_mirror".to_string(),
                output_format: OutputFormat::Txt,
                request_delay_seconds: 0.1,
                fetch_timeout_seconds: 30,
            },
            markdown: MarkdownConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_unparseable_base_url() {
        let mut config = create_test_config();
        config.crawler.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = create_test_config();
        config.crawler.base_url = "ftp://docs.example.com/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let mut config = create_test_config();
        config.crawler.output_dir = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_negative_delay_rejected() {
        let mut config = create_test_config();
        config.crawler.request_delay_seconds = -0.5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_nan_delay_rejected() {
        let mut config = create_test_config();
        config.crawler.request_delay_seconds = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_delay_allowed() {
        let mut config = create_test_config();
        config.crawler.request_delay_seconds = 0.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = create_test_config();
        config.crawler.fetch_timeout_seconds = 0;
        assert!(validate(&config).is_err());
    }

    #[cfg(feature = "markdown")]
    #[test]
    fn test_md_format_allowed_with_feature() {
        let mut config = create_test_config();
        config.crawler.output_format = OutputFormat::Md;
        assert!(validate(&config).is_ok());
    }

    #[cfg(not(feature = "markdown"))]
    #[test]
    fn test_md_format_rejected_without_feature() {
        let mut config = create_test_config();
        config.crawler.output_format = OutputFormat::Md;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }
}
