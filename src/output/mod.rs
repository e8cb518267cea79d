//! Output module: the local mirror tree
//!
//! This module owns everything about the on-disk artifact: how a URL maps
//! to a file path, how extracted content is written, and how progress is
//! reported while the tree fills up.

mod path;
mod progress;
mod store;

pub use path::map_url_to_path;
pub use progress::{CrawlSummary, ProgressReporter};
pub use store::{PageStore, StorageError};
