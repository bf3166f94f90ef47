//! Progress events emitted by the crawl loop
//!
//! The crawl loop never prints anything itself. It hands each event to a
//! [`ProgressReporter`]; the binary uses [`TracingReporter`] to narrate the run
//! through the log.

use crate::storage::SavedPage;
use url::Url;

/// Something that happened during a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A URL left the frontier and is about to be fetched
    Visiting { url: Url },

    /// A fetched page was written to disk
    Saved {
        page: SavedPage,
        saved_count: usize,
        page_budget: usize,
    },

    /// A fetched page could not be written
    SaveFailed { url: Url, reason: String },

    /// The fetch did not produce an HTML document
    FetchRejected {
        url: Url,
        status_code: Option<u16>,
        reason: String,
    },

    /// Links were extracted from a fetched page
    LinksFound {
        url: Url,
        found: usize,
        enqueued: usize,
    },

    /// The run is over
    Finished {
        saved_count: usize,
        visited_count: usize,
    },
}

/// Receiver for crawl progress events
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: CrawlEvent);
}

/// Reporter that writes every event to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report(&self, event: CrawlEvent) {
        match event {
            CrawlEvent::Visiting { url } => {
                tracing::info!("Visiting: {}", url);
            }
            CrawlEvent::Saved {
                page,
                saved_count,
                page_budget,
            } => {
                tracing::info!(
                    "Saved: {} [{}/{}]",
                    page.file_path.display(),
                    saved_count,
                    page_budget
                );
            }
            CrawlEvent::SaveFailed { url, reason } => {
                tracing::error!("File could not be saved for {}: {}", url, reason);
            }
            CrawlEvent::FetchRejected {
                url,
                status_code,
                reason,
            } => match status_code {
                Some(status) => tracing::warn!(
                    "HTML could not be retrieved for {} (status: {}): {}",
                    url,
                    status,
                    reason
                ),
                None => tracing::warn!("HTML could not be retrieved for {}: {}", url, reason),
            },
            CrawlEvent::LinksFound {
                url,
                found,
                enqueued,
            } => {
                tracing::debug!("{} links found on {} ({} new)", found, url, enqueued);
            }
            CrawlEvent::Finished {
                saved_count,
                visited_count,
            } => {
                tracing::info!(
                    "Crawl completed: {} pages saved, {} URLs visited",
                    saved_count,
                    visited_count
                );
            }
        }
    }
}
