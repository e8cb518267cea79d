//! Page persistence: writing extracted text to the mirror tree
//!
//! A storage failure is the one per-page condition that aborts the whole
//! crawl: if the output target cannot be written, the mirror is unusable
//! and continuing would only burn requests.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage-specific errors, always fatal to the crawl
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes extracted page content to the local mirror
#[derive(Debug, Default)]
pub struct PageStore;

impl PageStore {
    /// Creates a new page store
    pub fn new() -> Self {
        Self
    }

    /// Writes `text` to `path`, creating missing parent directories
    ///
    /// Content is written as UTF-8. An existing file is overwritten
    /// unconditionally, which is what makes reruns after a partial failure
    /// safe (at the cost of not detecting content drift).
    pub fn store(&self, path: &Path, text: &str) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, text).map_err(|source| StorageError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
