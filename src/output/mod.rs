//! Output module for progress reporting and crawl summaries
//!
//! This module handles:
//! - The progress events a crawl emits and the reporters that receive them
//! - The summary handed back when a run ends

mod events;
mod summary;

pub use events::{CrawlEvent, ProgressReporter, TracingReporter};
pub use summary::{print_summary, CrawlSummary};
