//! Breadth-first crawl frontier
//!
//! This module handles:
//! - FIFO ordering of URLs waiting to be fetched
//! - Rejecting URLs that are already waiting or already visited
//! - Recording each URL as visited the moment it leaves the queue

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Frontier of discovered-but-unprocessed URLs plus the visited set
///
/// A URL is either waiting in the queue or visited, never both, and is never
/// queued again once visited. `queued` always holds exactly the contents of
/// `pending`; it exists only to make membership checks cheap.
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, oldest first
    pending: VecDeque<Url>,

    /// Membership index over `pending`
    queued: HashSet<Url>,

    /// URLs that have been handed out for processing
    visited: HashSet<Url>,

    /// Visited URLs in the order they were handed out
    visit_order: Vec<Url>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.enqueue(seed);
        frontier
    }

    /// Adds a URL to the back of the queue
    ///
    /// # Returns
    ///
    /// * `true` - The URL was added
    /// * `false` - The URL was already queued or visited; nothing changed
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.pending.push_back(url);
        true
    }

    /// Removes the oldest queued URL and marks it visited
    ///
    /// The URL counts as visited from this point on, whatever happens to the
    /// fetch that follows.
    pub fn dequeue(&mut self) -> Option<Url> {
        let url = self.pending.pop_front()?;
        self.queued.remove(&url);

        if self.visited.insert(url.clone()) {
            self.visit_order.push(url.clone());
        }

        Some(url)
    }

    /// Returns true if the URL has already been handed out
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Returns true if the URL is waiting in the queue
    pub fn is_queued(&self, url: &Url) -> bool {
        self.queued.contains(url)
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no URLs are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Consumes the frontier and returns the visited URLs in visit order
    pub fn into_visited(self) -> Vec<Url> {
        self.visit_order
    }
}
