//! URL handling module for docmirror
//!
//! This module provides URL normalization (the canonical dedup identity)
//! and the same-origin predicate that bounds the crawl to one site.

mod normalize;

pub use normalize::normalize_url;

use url::Url;

/// Returns true if `candidate` belongs to the same origin as `seed`
///
/// Origin here means exact host and port: no subdomain matching, so a link
/// to `blog.example.com` is off-origin for a crawl seeded at `example.com`.
///
/// # Examples
///
/// ```
/// use docmirror::url::is_same_origin;
/// use url::Url;
///
/// let seed = Url::parse("https://docs.example.com/").unwrap();
/// let ok = Url::parse("https://docs.example.com/guide").unwrap();
/// let off = Url::parse("https://other.com/guide").unwrap();
/// assert!(is_same_origin(&seed, &ok));
/// assert!(!is_same_origin(&seed, &off));
/// ```
pub fn is_same_origin(seed: &Url, candidate: &Url) -> bool {
    seed.host_str() == candidate.host_str() && seed.port_or_known_default() == candidate.port_or_known_default()
}
