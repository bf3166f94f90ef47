use crate::config::types::{Config, CrawlSettings, HttpSettings};
use crate::url::parse_seed;
use crate::ConfigError;

/// Validates the entire configuration, including the seed URL
///
/// This is the gate a crawl has to pass before it starts: a missing seed is
/// reported as [`ConfigError::MissingSeed`].
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_settings(config)?;
    validate_seed(config.crawl.seed_url.as_deref())?;
    Ok(())
}

/// Validates everything except the presence of a seed
///
/// Config files may leave the seed to the command line, so loading a file
/// only checks ranges and formats.
pub fn validate_settings(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_settings(&config.crawl)?;
    validate_http_settings(&config.http)?;

    if let Some(seed) = config.crawl.seed_url.as_deref() {
        if !seed.trim().is_empty() {
            validate_seed(Some(seed))?;
        }
    }

    Ok(())
}

/// Validates crawl settings
fn validate_crawl_settings(settings: &CrawlSettings) -> Result<(), ConfigError> {
    if settings.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            settings.max_pages
        )));
    }

    if settings.output_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_http_settings(settings: &HttpSettings) -> Result<(), ConfigError> {
    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if settings.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            settings.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the seed URL
fn validate_seed(seed: Option<&str>) -> Result<(), ConfigError> {
    let seed = match seed.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ConfigError::MissingSeed),
    };

    parse_seed(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    Ok(())
}
