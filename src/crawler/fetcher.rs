//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building a reusable HTTP client with the configured user agent and timeout
//! - GET requests that follow redirects
//! - Classifying responses as HTML, rejected, or failed

use crate::config::HttpSettings;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Content types that are saved and parsed for links
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// Maximum redirect hops followed for one request
const MAX_REDIRECTS: usize = 10;

/// Reasons a URL did not produce an HTML document
///
/// All of these are local to one page: the page is skipped and the crawl
/// carries on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status_code}")]
    Status { status_code: u16 },

    #[error("not HTML (content type {content_type:?}, status {status_code})")]
    ContentType {
        status_code: u16,
        content_type: String,
    },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// The HTTP status that came back, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code } | Self::ContentType { status_code, .. } => {
                Some(*status_code)
            }
            Self::Timeout | Self::Network(_) => None,
        }
    }
}

/// A successfully fetched HTML document
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value
    pub content_type: String,

    /// Page body, decoded as text
    pub body: String,
}

/// Transport used by the crawl loop to retrieve pages
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches one URL
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedPage)` - The response was an HTML document
    /// * `Err(FetchError)` - Error status, non-HTML content, timeout or network failure
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// The client keeps connections alive between requests, so a single instance
/// is shared for the whole run.
///
/// # Example
///
/// ```no_run
/// use site_path_crawler::config::HttpSettings;
/// use site_path_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpSettings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(settings: &HttpSettings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(settings)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        let final_url = response.url().clone();

        if status.as_u16() >= 400 {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_html_content_type(&content_type) {
            return Err(FetchError::ContentType {
                status_code: status.as_u16(),
                content_type,
            });
        }

        let body = response.text().await.map_err(classify_error)?;

        Ok(FetchedPage {
            final_url,
            status_code: status.as_u16(),
            content_type,
            body,
        })
    }
}

/// Returns true if a Content-Type header names an HTML document
fn is_html_content_type(content_type: &str) -> bool {
    let lowered = content_type.to_ascii_lowercase();
    HTML_CONTENT_TYPES.iter().any(|ct| lowered.contains(ct))
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}
