//! Link discovery: hyperlinks on a page that stay on the crawl origin
//!
//! This module parses a fetched page and returns the set of same-origin
//! URLs it links to, resolved to absolute form and normalized so they can
//! feed straight into the frontier's dedup gate.

use crate::url::{is_same_origin, normalize_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the same-origin links from a page
///
/// # Link Rules
///
/// **Include:** every `<a href="...">`, after resolving the href against
/// `page_url` (relative, protocol-relative, and absolute references all
/// resolve correctly via URL joining).
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` links and data URIs
/// - Fragment-only hrefs (same-page anchors)
/// - Links whose host or port differs from the seed's (no subdomain matching)
///
/// Kept links are normalized (fragment and query stripped), so duplicates on
/// the same page collapse to one set entry.
///
/// # Arguments
///
/// * `page_url` - The URL of the page the HTML came from
/// * `html` - The raw page markup
/// * `seed` - The crawl origin; links off this origin are dropped
///
/// # Returns
///
/// The set of discovered same-origin URLs in normalized form
pub fn discover_links(page_url: &Url, html: &str, seed: &Url) -> HashSet<Url> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();

    // Selector is a fixed literal, parse cannot fail at runtime
    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_link(href, page_url) {
                    if !is_same_origin(seed, &resolved) {
                        continue;
                    }
                    if let Ok(normalized) = normalize_url(resolved.as_str()) {
                        links.insert(normalized);
                    }
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and filters out non-page links
///
/// Returns None for empty hrefs, special schemes (javascript:, mailto:,
/// tel:, data:), fragment-only anchors, and hrefs that fail to resolve.
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Fragment-only links point back at the same page
    if href.starts_with('#') {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    fn page_url() -> Url {
        Url::parse("https://example.com/guide/").unwrap()
    }

    fn discover(html: &str) -> HashSet<Url> {
        discover_links(&page_url(), html, &seed())
    }

    fn contains(links: &HashSet<Url>, s: &str) -> bool {
        links.iter().any(|u| u.as_str() == s)
    }

    #[test]
    fn test_relative_link_resolved() {
        let links = discover(r#"<html><body><a href="/guide/intro">Intro</a></body></html>"#);
        assert_eq!(links.len(), 1);
        assert!(contains(&links, "https://example.com/guide/intro"));
    }

    #[test]
    fn test_relative_path_link_resolved() {
        let links = discover(r#"<html><body><a href="intro">Intro</a></body></html>"#);
        assert!(contains(&links, "https://example.com/guide/intro"));
    }

    #[test]
    fn test_protocol_relative_link_resolved() {
        let links = discover(r#"<html><body><a href="//example.com/faq">FAQ</a></body></html>"#);
        assert!(contains(&links, "https://example.com/faq"));
    }

    #[test]
    fn test_absolute_same_origin_kept() {
        let links =
            discover(r#"<html><body><a href="https://example.com/api">API</a></body></html>"#);
        assert!(contains(&links, "https://example.com/api"));
    }

    #[test]
    fn test_off_origin_excluded() {
        let links = discover(r#"<html><body><a href="https://other.com/x">Off</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_subdomain_excluded() {
        let links =
            discover(r#"<html><body><a href="https://blog.example.com/post">Blog</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_stripped_and_duplicates_collapse() {
        let links = discover(
            r#"<html><body>
            <a href="/guide/intro">Intro</a>
            <a href="https://example.com/guide/intro#setup">Setup</a>
            </body></html>"#,
        );
        assert_eq!(links.len(), 1);
        assert!(contains(&links, "https://example.com/guide/intro"));
    }

    #[test]
    fn test_query_stripped() {
        let links = discover(r#"<html><body><a href="/search?q=hello">Search</a></body></html>"#);
        assert!(contains(&links, "https://example.com/search"));
    }

    #[test]
    fn test_skip_special_schemes() {
        let links = discover(
            r#"<html><body>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:a@example.com">Mail</a>
            <a href="tel:+1234">Call</a>
            <a href="data:text/html,<h1>x</h1>">Data</a>
            </body></html>"#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_fragment_only() {
        let links = discover(r##"<html><body><a href="#section">Jump</a></body></html>"##);
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_and_off_origin_links_collapse() {
        // /guide/ links to /guide/intro, the same URL with a fragment, and an
        // off-origin page: exactly one same-origin discovery remains.
        let links = discover(
            r#"<html><body>
            <a href="/guide/intro">Intro</a>
            <a href="https://example.com/guide/intro#setup">Setup</a>
            <a href="https://other.com/x">Other</a>
            </body></html>"#,
        );
        assert_eq!(links.len(), 1);
        assert!(contains(&links, "https://example.com/guide/intro"));
    }
}
