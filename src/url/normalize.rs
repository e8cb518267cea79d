use crate::UrlError;
use url::Url;

/// Normalizes a URL to its canonical crawl identity
///
/// Two URLs that differ only in fragment or query are the same page for the
/// purposes of deduplication, so the canonical form is scheme + host + path
/// only.
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than http/https
/// 3. Reject URLs without a host
/// 4. Remove fragment (everything after #)
/// 5. Remove query string (everything after ?)
///
/// Normalization is idempotent: an already-normalized URL passes through
/// unchanged.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use docmirror::url::normalize_url;
///
/// let url = normalize_url("https://docs.example.com/guide/intro#setup").unwrap();
/// assert_eq!(url.as_str(), "https://docs.example.com/guide/intro");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    url.set_query(None);

    Ok(url)
}
