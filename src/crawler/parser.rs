//! HTML link extraction
//!
//! This module pulls raw hyperlink references out of fetched HTML. Resolving
//! and filtering them is left to the crawl loop.

use scraper::{Html, Selector};
use std::collections::HashSet;

/// Elements whose `href` attribute is a navigable hyperlink
const LINK_SELECTOR: &str = "a[href], area[href]";

/// Source of raw hrefs for a fetched document
pub trait LinkExtractor: Send + Sync {
    /// Returns every hyperlink reference in the document, unresolved
    ///
    /// Malformed markup is parsed best-effort and never fails.
    fn extract_links(&self, html: &str) -> Vec<String>;
}

/// Link extractor built on scraper's html5ever parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        let mut seen = HashSet::new();
        let mut links = Vec::new();

        if let Ok(selector) = Selector::parse(LINK_SELECTOR) {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    if seen.insert(href) {
                        links.push(href.to_string());
                    }
                }
            }
        }

        links
    }
}

/// Convenience function for extracting links with the default extractor
///
/// # Example
///
/// ```
/// use site_path_crawler::crawler::extract_links_simple;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// assert_eq!(extract_links_simple(html), vec!["/page".to_string()]);
/// ```
pub fn extract_links_simple(html: &str) -> Vec<String> {
    HtmlLinkExtractor.extract_links(html)
}
