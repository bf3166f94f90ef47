use crate::config::types::Config;
use crate::config::validation::validate;
use crate::url::{origin_authority, parse_seed};
use crate::ConfigError;
use std::time::Duration;
use url::Url;

/// The fixed parameters of one crawl run
///
/// Built once before the crawl starts and never changed afterwards. The
/// origin authority is derived from the seed here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    seed_url: Url,
    origin_authority: String,
    page_budget: usize,
    delay: Duration,
}

impl CrawlTarget {
    /// Creates a target from an already parsed seed
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlTarget)` - The seed has a host and the budget is positive
    /// * `Err(ConfigError)` - Otherwise
    pub fn new(seed_url: Url, page_budget: usize, delay: Duration) -> Result<Self, ConfigError> {
        if page_budget < 1 {
            return Err(ConfigError::Validation(
                "page budget must be at least 1".to_string(),
            ));
        }

        let origin_authority = origin_authority(&seed_url).ok_or_else(|| {
            ConfigError::InvalidUrl(format!("Seed URL '{}' has no host", seed_url))
        })?;

        Ok(Self {
            seed_url,
            origin_authority,
            page_budget,
            delay,
        })
    }

    /// Validates a configuration and derives the target from it
    ///
    /// # Example
    ///
    /// ```
    /// use site_path_crawler::config::{Config, CrawlTarget};
    ///
    /// let mut config = Config::default();
    /// config.crawl.seed_url = Some("example.com".to_string());
    ///
    /// let target = CrawlTarget::from_config(&config).unwrap();
    /// assert_eq!(target.origin_authority(), "example.com");
    /// assert_eq!(target.page_budget(), 500);
    /// ```
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        validate(config)?;

        let seed = config
            .crawl
            .seed_url
            .as_deref()
            .ok_or(ConfigError::MissingSeed)?;
        let seed_url = parse_seed(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        Self::new(
            seed_url,
            config.crawl.max_pages,
            Duration::from_millis(config.crawl.delay_ms),
        )
    }

    pub fn seed_url(&self) -> &Url {
        &self.seed_url
    }

    pub fn origin_authority(&self) -> &str {
        &self.origin_authority
    }

    pub fn page_budget(&self) -> usize {
        self.page_budget
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
