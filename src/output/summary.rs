//! Crawl summary returned to the caller when a run ends

use crate::storage::SavedPage;
use chrono::{DateTime, Utc};
use url::Url;

/// Everything a finished run hands back
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// The authority the crawl was confined to
    pub origin_authority: String,

    /// Page budget the run was started with
    pub page_budget: usize,

    /// Every URL taken from the frontier, in visit order; no duplicates
    pub visited: Vec<Url>,

    /// Pages written to disk, in save order
    pub saved: Vec<SavedPage>,

    /// Pages fetched as HTML that could not be written
    pub failed_saves: usize,

    /// URLs whose fetch was rejected or failed
    pub rejected_fetches: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlSummary {
    /// Number of pages written to disk
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Returns true if the run stopped because the page budget was used up
    pub fn budget_reached(&self) -> bool {
        self.saved_count() >= self.page_budget
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary ===\n");

    println!("Target: {}", summary.origin_authority);
    println!("  URLs visited: {}", summary.visited.len());
    println!(
        "  Pages saved: {} / {}",
        summary.saved_count(),
        summary.page_budget
    );
    println!("  Failed saves: {}", summary.failed_saves);
    println!("  Rejected fetches: {}", summary.rejected_fetches);
    println!("  Duration: {}s", summary.duration_seconds());

    if summary.budget_reached() {
        println!("\nStopped after reaching the page budget.");
    } else {
        println!("\nStopped after running out of links to follow.");
    }
}
