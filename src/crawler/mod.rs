//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with redirect following and content-type checks
//! - HTML link extraction
//! - The breadth-first frontier
//! - Overall crawl coordination
//! - The terminal status indicator

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod status;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::Frontier;
pub use parser::{extract_links_simple, HtmlLinkExtractor, LinkExtractor};
pub use status::StatusIndicator;
