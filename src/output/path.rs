//! URL-to-path mapping for the local mirror
//!
//! Each stored page lives at a path derived purely from its URL, so the
//! mirror's directory tree is a 1:1 image of the site's path structure.
//! Downstream consumers rely on this: a file's containing folder name is
//! its topic label.

use crate::config::OutputFormat;
use std::path::{Path, PathBuf};
use url::Url;

/// Maps a normalized URL to its file path inside the output directory
///
/// # Mapping Rules
///
/// 1. Take the URL path component
/// 2. A trailing `/` (or empty path) gets `index` appended
/// 3. An existing file extension is replaced with the format's extension;
///    otherwise the format's extension is appended
/// 4. The leading separator is stripped and the output root prefixed
///
/// Deterministic: the same URL always yields the same path. Distinct URLs
/// collide only when an extensioned and an extensionless path share a stem
/// (`/a.html` vs `/a`); the last writer wins.
///
/// # Examples
///
/// ```
/// use docmirror::config::OutputFormat;
/// use docmirror::output::map_url_to_path;
/// use std::path::Path;
/// use url::Url;
///
/// let url = Url::parse("https://docs.example.com/guide/").unwrap();
/// let path = map_url_to_path(&url, OutputFormat::Txt, Path::new("mirror"));
/// assert_eq!(path, Path::new("mirror/guide/index.txt"));
/// ```
pub fn map_url_to_path(url: &Url, format: OutputFormat, output_dir: &Path) -> PathBuf {
    let mut path = url.path().to_string();

    if path.is_empty() || path.ends_with('/') {
        path.push_str("index");
    }

    let mut relative = PathBuf::from(path.trim_start_matches('/'));
    // Replaces an existing extension, appends one otherwise
    relative.set_extension(format.extension());

    output_dir.join(relative)
}
