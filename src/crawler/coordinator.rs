//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the collaborators together:
//! - Taking the next URL from the frontier
//! - Fetching it and saving HTML pages
//! - Extracting, normalizing and filtering links
//! - Enqueueing same-origin links for later visits
//! - Pausing between requests and stopping on budget or exhaustion

use crate::config::{Config, CrawlTarget};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::status::StatusIndicator;
use crate::output::{CrawlEvent, CrawlSummary, ProgressReporter, TracingReporter};
use crate::storage::{FsPageStore, PageStore, SavedPage};
use crate::url::{normalize_link, same_origin};
use crate::CrawlerError;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

/// Main crawler coordinator structure
///
/// Owns the frontier and every collaborator for one run. URLs are processed
/// strictly one at a time, so nothing here needs locking.
pub struct Coordinator {
    target: CrawlTarget,
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn LinkExtractor>,
    store: Box<dyn PageStore>,
    reporter: Arc<dyn ProgressReporter>,
    status_indicator: bool,
    frontier: Frontier,
    saved: Vec<SavedPage>,
    failed_saves: usize,
    rejected_fetches: usize,
}

impl Coordinator {
    /// Creates a coordinator from explicit collaborators
    ///
    /// The frontier starts out holding only the seed URL. The status
    /// indicator is off until enabled with [`Coordinator::with_status_indicator`].
    pub fn new(
        target: CrawlTarget,
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn LinkExtractor>,
        store: Box<dyn PageStore>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        let frontier = Frontier::with_seed(target.seed_url().clone());

        Self {
            target,
            fetcher,
            extractor,
            store,
            reporter,
            status_indicator: false,
            frontier,
            saved: Vec::new(),
            failed_saves: 0,
            rejected_fetches: 0,
        }
    }

    /// Creates a coordinator with the production collaborators
    ///
    /// This validates the configuration, creates the output directory and
    /// builds the shared HTTP client.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlerError)` - Invalid configuration, unusable output directory,
    ///   or an HTTP client that could not be built
    pub fn from_config(config: &Config) -> Result<Self, CrawlerError> {
        let target = CrawlTarget::from_config(config)?;
        let store = FsPageStore::open(&config.crawl.output_dir)?;
        let fetcher = HttpFetcher::new(&config.http)?;

        Ok(Self::new(
            target,
            Box::new(fetcher),
            Box::new(HtmlLinkExtractor),
            Box::new(store),
            Arc::new(TracingReporter),
        )
        .with_status_indicator(config.crawl.status_indicator))
    }

    /// Turns the stderr spinner on or off for this run
    pub fn with_status_indicator(mut self, enabled: bool) -> Self {
        self.status_indicator = enabled;
        self
    }

    /// The parameters this run was built with
    pub fn target(&self) -> &CrawlTarget {
        &self.target
    }

    /// Runs the crawl loop to completion
    ///
    /// The loop ends when the page budget has been reached or the frontier is
    /// empty. No per-page failure stops it early.
    pub async fn run(mut self) -> CrawlSummary {
        let started_at = Utc::now();
        let budget = self.target.page_budget();

        tracing::info!(
            "Starting crawl of {} (origin: {}, budget: {} pages)",
            self.target.seed_url(),
            self.target.origin_authority(),
            budget
        );

        let indicator = self
            .status_indicator
            .then(|| StatusIndicator::spawn(format!("Target: {}", self.target.origin_authority())));

        while self.saved.len() < budget {
            let Some(url) = self.frontier.dequeue() else {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            };

            self.process_url(&url).await;

            if self.has_more_work() && !self.target.delay().is_zero() {
                tokio::time::sleep(self.target.delay()).await;
            }
        }

        if self.saved.len() >= budget {
            tracing::info!("Page budget of {} reached", budget);
        }

        if let Some(indicator) = indicator {
            indicator.stop().await;
        }

        let visited = std::mem::take(&mut self.frontier).into_visited();

        self.reporter.report(CrawlEvent::Finished {
            saved_count: self.saved.len(),
            visited_count: visited.len(),
        });

        CrawlSummary {
            origin_authority: self.target.origin_authority().to_string(),
            page_budget: budget,
            visited,
            saved: self.saved,
            failed_saves: self.failed_saves,
            rejected_fetches: self.rejected_fetches,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Returns true if the loop will take another URL
    fn has_more_work(&self) -> bool {
        !self.frontier.is_empty() && self.saved.len() < self.target.page_budget()
    }

    /// Processes a single URL that has just left the frontier
    ///
    /// This method:
    /// 1. Fetches the page
    /// 2. Saves it if it is HTML
    /// 3. Extracts links and enqueues the same-origin ones
    async fn process_url(&mut self, url: &Url) {
        self.reporter.report(CrawlEvent::Visiting { url: url.clone() });

        let result = self.fetcher.fetch(url).await;
        match result {
            Ok(page) => {
                tracing::trace!(
                    "Fetched {} ({} {}, final URL {})",
                    url,
                    page.status_code,
                    page.content_type,
                    page.final_url
                );
                self.save_page(url, &page.body);

                // Links resolve against the requested URL, not the redirect target
                let (found, enqueued) = self.enqueue_links(url, &page.body);
                self.reporter.report(CrawlEvent::LinksFound {
                    url: url.clone(),
                    found,
                    enqueued,
                });
            }
            Err(e) => {
                self.rejected_fetches += 1;
                self.reporter.report(CrawlEvent::FetchRejected {
                    url: url.clone(),
                    status_code: e.status_code(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Writes a fetched page through the page store
    ///
    /// A failed write is reported and counted, and the crawl moves on.
    fn save_page(&mut self, url: &Url, body: &str) {
        match self.store.save(url, body) {
            Ok(page) => {
                self.saved.push(page.clone());
                self.reporter.report(CrawlEvent::Saved {
                    page,
                    saved_count: self.saved.len(),
                    page_budget: self.target.page_budget(),
                });
            }
            Err(e) => {
                self.failed_saves += 1;
                self.reporter.report(CrawlEvent::SaveFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Extracts links from a page body and enqueues the eligible ones
    ///
    /// # Returns
    ///
    /// `(found, enqueued)`: distinct normalized links on the page, and how many
    /// of them were new same-origin URLs added to the frontier
    fn enqueue_links(&mut self, base: &Url, body: &str) -> (usize, usize) {
        let mut seen = HashSet::new();
        let mut enqueued = 0;

        for raw in self.extractor.extract_links(body) {
            let Some(link) = normalize_link(base, &raw) else {
                tracing::trace!("Skipping non-navigable href {:?}", raw);
                continue;
            };

            if !seen.insert(link.clone()) {
                continue;
            }

            if !same_origin(&link, self.target.origin_authority()) {
                tracing::trace!("Skipping off-origin link {}", link);
                continue;
            }

            if self.frontier.enqueue(link) {
                enqueued += 1;
            }
        }

        (seen.len(), enqueued)
    }
}

/// Runs a complete crawl from a configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration; must contain a seed URL
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - The crawl ran to completion
/// * `Err(CrawlerError)` - Setup failed and nothing was crawled
///
/// # Example
///
/// ```no_run
/// use site_path_crawler::config::Config;
/// use site_path_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = Config::default();
/// config.crawl.seed_url = Some("https://example.com".to_string());
/// let summary = run_crawl(config).await?;
/// println!("Saved {} pages", summary.saved_count());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlSummary, CrawlerError> {
    let coordinator = Coordinator::from_config(&config)?;
    Ok(coordinator.run().await)
}
