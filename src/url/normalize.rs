use crate::UrlError;
use url::Url;

/// Href schemes that never point at a fetchable web page
const REJECTED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Resolves a raw href against the page it was found on
///
/// # Normalization Steps
///
/// 1. Trim whitespace; reject empty hrefs
/// 2. Reject `javascript:`, `mailto:`, `tel:` and `data:` hrefs (case-insensitive)
/// 3. Join against `base` (handles absolute, scheme-relative and relative hrefs)
/// 4. Remove the fragment (everything after #)
///
/// Nothing else is canonicalized: host case and percent-encoding are whatever
/// the `url` crate's parser produces, and query strings are kept verbatim.
///
/// # Arguments
///
/// * `base` - The URL of the page the href was found on
/// * `raw_href` - The href attribute value as written in the document
///
/// # Returns
///
/// * `Some(Url)` - Absolute, fragment-free URL
/// * `None` - The href is empty, uses a rejected scheme, or cannot be resolved
///
/// # Examples
///
/// ```
/// use site_path_crawler::url::normalize_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let url = normalize_link(&base, "intro#setup").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs/intro");
/// assert!(normalize_link(&base, "mailto:admin@example.com").is_none());
/// ```
pub fn normalize_link(base: &Url, raw_href: &str) -> Option<Url> {
    let href = raw_href.trim();
    if href.is_empty() {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if REJECTED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}

/// Parses the user-supplied seed into an absolute crawl start URL
///
/// Bare domains such as `example.com` or `example.com/blog` are taken to mean
/// `https://`. Only http and https seeds are accepted, and the fragment is
/// dropped so the seed lands in the frontier in the same form as links to it.
///
/// # Examples
///
/// ```
/// use site_path_crawler::url::parse_seed;
///
/// let seed = parse_seed("example.com").unwrap();
/// assert_eq!(seed.as_str(), "https://example.com/");
/// ```
pub fn parse_seed(input: &str) -> Result<Url, UrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Parse("seed URL is empty".to_string()));
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let mut url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS seeds are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}
