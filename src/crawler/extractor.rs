//! Content extraction: page markup to plain text or Markdown
//!
//! Documentation pages carry their readable content inside a single fixed
//! container element; everything else (navigation, chrome, scripts) is
//! noise. This module isolates that region and flattens it to the
//! configured output format. Extraction never fails: a page without the
//! container degrades to whole-document extraction with a warning.

use crate::config::{MarkdownConfig, OutputFormat};
use scraper::{ElementRef, Html, Selector};

/// Selector for the designated content container
const CONTENT_CONTAINER: &str = "div#content-area";

/// Converts raw page markup to the configured output format
///
/// Stateless apart from the configuration captured at construction; safe to
/// reuse across every page of a crawl.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    format: OutputFormat,
    markdown: MarkdownConfig,
}

impl ContentExtractor {
    /// Creates an extractor for the given output format
    ///
    /// The Markdown switches are ignored in plain-text mode.
    pub fn new(format: OutputFormat, markdown: MarkdownConfig) -> Self {
        Self { format, markdown }
    }

    /// Extracts the content region of a page, never failing
    ///
    /// Locates the `div#content-area` container; if the page lacks one, a
    /// warning is logged and the entire document becomes the content region.
    ///
    /// # Arguments
    ///
    /// * `url` - The page URL, used only for the fallback diagnostic
    /// * `html` - The raw page markup
    ///
    /// # Returns
    ///
    /// The extracted text in the configured format
    pub fn extract(&self, url: &str, html: &str) -> String {
        let document = Html::parse_document(html);

        // Fixed literal selector, parse cannot fail at runtime
        let container = Selector::parse(CONTENT_CONTAINER)
            .ok()
            .and_then(|sel| document.select(&sel).next());

        match container {
            Some(region) => self.render(RegionSource::Element(region)),
            None => {
                tracing::warn!(
                    "No {} container found in {}, extracting whole document",
                    CONTENT_CONTAINER,
                    url
                );
                self.render(RegionSource::Document(&document))
            }
        }
    }

    fn render(&self, region: RegionSource<'_>) -> String {
        match self.format {
            OutputFormat::Txt => region.to_plain_text(),
            OutputFormat::Md => {
                #[cfg(feature = "markdown")]
                {
                    self.to_markdown(&region.to_inner_html())
                }
                #[cfg(not(feature = "markdown"))]
                {
                    // Config validation rejects the md format in builds
                    // without the markdown feature before any page is fetched.
                    unreachable!("markdown output requested without the 'markdown' feature")
                }
            }
        }
    }

    /// Converts the region's markup to Markdown, applying the configured
    /// link/image switches
    #[cfg(feature = "markdown")]
    fn to_markdown(&self, region_html: &str) -> String {
        let mut markdown = html2md::parse_html(region_html);
        if self.markdown.ignore_images {
            markdown = strip_markdown_images(&markdown);
        }
        if self.markdown.ignore_links {
            markdown = strip_markdown_links(&markdown);
        }
        markdown.trim().to_string()
    }
}

/// The content region: either the designated container or, on fallback,
/// the whole document
enum RegionSource<'a> {
    Element(ElementRef<'a>),
    Document(&'a Html),
}

impl RegionSource<'_> {
    /// Flattens the region to plain text: text nodes in reading order,
    /// newline separated, whitespace-only nodes dropped
    fn to_plain_text(&self) -> String {
        let texts: Vec<String> = match self {
            Self::Element(element) => collect_text(element.text()),
            Self::Document(document) => collect_text(document.root_element().text()),
        };
        texts.join("\n")
    }

    #[cfg(feature = "markdown")]
    fn to_inner_html(&self) -> String {
        match self {
            Self::Element(element) => element.inner_html(),
            Self::Document(document) => document.root_element().html(),
        }
    }
}

fn collect_text<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<String> {
    iter.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes Markdown image syntax `![alt](target)` from converted output
#[cfg(feature = "markdown")]
fn strip_markdown_images(markdown: &str) -> String {
    let bytes = markdown.as_bytes();
    let mut out = String::with_capacity(markdown.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'!' && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            if let Some(end) = find_bracket_pair_end(markdown, i + 1) {
                i = end;
                continue;
            }
        }
        let ch = markdown[i..].chars().next().unwrap_or('\u{FFFD}');
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

/// Replaces Markdown links `[text](target)` with their bare text
#[cfg(feature = "markdown")]
fn strip_markdown_links(markdown: &str) -> String {
    let bytes = markdown.as_bytes();
    let mut out = String::with_capacity(markdown.len());
    let mut i = 0;

    while i < bytes.len() {
        // Image syntax is a link with a '!' prefix; copy it through untouched
        if bytes[i] == b'!' && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            if let Some(end) = find_bracket_pair_end(markdown, i + 1) {
                out.push_str(&markdown[i..end]);
                i = end;
                continue;
            }
        }
        if bytes[i] == b'[' {
            if let Some(end) = find_bracket_pair_end(markdown, i) {
                let close = markdown[i..].find(']').map(|p| i + p).unwrap_or(i);
                out.push_str(&markdown[i + 1..close]);
                i = end;
                continue;
            }
        }
        let ch = markdown[i..].chars().next().unwrap_or('\u{FFFD}');
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

/// Given the index of a `[`, returns the index just past the closing `)` of
/// a `[...](...)` pair, or None if the shape does not match
#[cfg(feature = "markdown")]
fn find_bracket_pair_end(markdown: &str, open: usize) -> Option<usize> {
    let close = markdown[open..].find(']')? + open;
    if markdown.as_bytes().get(close + 1) != Some(&b'(') {
        return None;
    }
    let paren_close = markdown[close + 1..].find(')')? + close + 1;
    Some(paren_close + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txt_extractor() -> ContentExtractor {
        ContentExtractor::new(OutputFormat::Txt, MarkdownConfig::default())
    }

    #[test]
    fn test_extracts_content_region_only() {
        let html = r#"<html><body>
            <nav>Navigation junk</nav>
            <div id="content-area"><h1>Title</h1><p>Body text.</p></div>
            <footer>Footer junk</footer>
            </body></html>"#;

        let text = txt_extractor().extract("https://example.com/", html);
        assert_eq!(text, "Title\nBody text.");
    }

    #[test]
    fn test_block_texts_newline_separated() {
        let html = r#"<div id="content-area"><p>One</p><p>Two</p><p>Three</p></div>"#;
        let text = txt_extractor().extract("https://example.com/", html);
        assert_eq!(text, "One\nTwo\nThree");
    }

    #[test]
    fn test_missing_container_falls_back_to_whole_document() {
        let html = r#"<html><body><p>Orphan content</p></body></html>"#;
        let text = txt_extractor().extract("https://example.com/", html);
        assert!(text.contains("Orphan content"));
    }

    #[test]
    fn test_markup_discarded() {
        let html = r#"<div id="content-area"><p>Click <a href="/x">here</a> now</p></div>"#;
        let text = txt_extractor().extract("https://example.com/", html);
        assert_eq!(text, "Click\nhere\nnow");
    }

    #[test]
    fn test_never_fails_on_garbage() {
        let text = txt_extractor().extract("https://example.com/", "<<<%%% not html");
        // Degrades, never panics
        let _ = text;
    }

    #[cfg(feature = "markdown")]
    mod markdown {
        use super::*;

        fn md_extractor(markdown: MarkdownConfig) -> ContentExtractor {
            ContentExtractor::new(OutputFormat::Md, markdown)
        }

        #[test]
        fn test_links_preserved_by_default() {
            let html =
                r#"<div id="content-area"><p>See <a href="https://example.com/x">the guide</a></p></div>"#;
            let md = md_extractor(MarkdownConfig::default()).extract("https://example.com/", html);
            assert!(md.contains("[the guide](https://example.com/x)"), "got: {}", md);
        }

        #[test]
        fn test_images_dropped_by_default() {
            let html = r#"<div id="content-area"><p>Before <img src="/pic.png" alt="pic"> after</p></div>"#;
            let md = md_extractor(MarkdownConfig::default()).extract("https://example.com/", html);
            assert!(!md.contains("pic.png"), "got: {}", md);
            assert!(md.contains("Before"));
            assert!(md.contains("after"));
        }

        #[test]
        fn test_ignore_links_keeps_text() {
            let config = MarkdownConfig {
                ignore_links: true,
                ignore_images: true,
            };
            let html =
                r#"<div id="content-area"><p>See <a href="https://example.com/x">the guide</a></p></div>"#;
            let md = md_extractor(config).extract("https://example.com/", html);
            assert!(md.contains("the guide"), "got: {}", md);
            assert!(!md.contains("example.com/x"), "got: {}", md);
        }

        #[test]
        fn test_strip_images_pass() {
            assert_eq!(
                strip_markdown_images("before ![alt](img.png) after"),
                "before  after"
            );
        }

        #[test]
        fn test_strip_links_pass() {
            assert_eq!(
                strip_markdown_links("see [the guide](https://x/) now"),
                "see the guide now"
            );
        }

        #[test]
        fn test_strip_links_leaves_images_alone() {
            assert_eq!(
                strip_markdown_links("![alt](img.png)"),
                "![alt](img.png)"
            );
        }
    }
}
