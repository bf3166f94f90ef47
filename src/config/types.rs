use serde::Deserialize;

/// Default directory pages are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default maximum number of pages saved per run
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Default pause between requests (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 250;

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Main configuration structure
///
/// Every field has a default, so an empty file (or no file at all) is a valid
/// starting point; command-line flags are layered on top in `main.rs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// Where the crawl starts; an absolute URL or a bare domain
    #[serde(rename = "seed-url", default)]
    pub seed_url: Option<String>,

    /// Directory that receives the saved pages
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: String,

    /// Maximum number of pages to save
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Pause after each processed URL (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Show the spinner on stderr while crawling
    #[serde(rename = "status-indicator", default = "default_status_indicator")]
    pub status_indicator: bool,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            seed_url: None,
            output_dir: default_output_dir(),
            max_pages: default_max_pages(),
            delay_ms: default_delay_ms(),
            status_indicator: default_status_indicator(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_status_indicator() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
