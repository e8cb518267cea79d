//! Crawl frontier: the pending queue and the dedup gate
//!
//! The frontier owns the crawl's only mutable state: a FIFO queue of URLs
//! waiting to be fetched and the set of URLs ever claimed. A URL enters the
//! queue at most once over the crawl's lifetime; `try_claim` is the single
//! gate enforcing that invariant.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO frontier with a claimed-set dedup invariant
///
/// Claiming marks membership immediately (before the URL is fetched), so the
/// set covers both visited and still-pending URLs and a link discovered from
/// two different pages is enqueued exactly once.
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, in insertion (breadth-first) order
    pending: VecDeque<Url>,

    /// Normalized form of every URL ever claimed: visited or pending
    claimed: HashSet<String>,

    /// Count of URLs ever enqueued; monotonically non-decreasing.
    /// Progress display only, never consulted for control flow.
    known_total: usize,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the seed URL unconditionally
    pub fn seed(&mut self, url: Url) {
        self.claimed.insert(url.as_str().to_string());
        self.pending.push_back(url);
        self.known_total += 1;
    }

    /// Claims a URL if it has never been seen, enqueueing it
    ///
    /// Returns true exactly once per distinct normalized URL over the
    /// frontier's lifetime. A false return means the URL is already pending
    /// or already visited and the caller must discard it.
    pub fn try_claim(&mut self, url: Url) -> bool {
        if !self.claimed.insert(url.as_str().to_string()) {
            return false;
        }
        self.pending.push_back(url);
        self.known_total += 1;
        true
    }

    /// Pops the next URL to fetch, or None when the queue is drained
    pub fn next(&mut self) -> Option<Url> {
        self.pending.pop_front()
    }

    /// Number of URLs currently waiting to be fetched
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Count of URLs ever enqueued (visited and pending)
    pub fn total(&self) -> usize {
        self.known_total
    }

    /// Returns whether the pending queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
