use url::Url;

/// Returns the host authority of a URL: the host plus the port when one is
/// written explicitly
///
/// The `url` crate drops ports that equal the scheme default, so
/// `https://example.com:443/` and `https://example.com/` share the authority
/// `example.com`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_path_crawler::url::origin_authority;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(origin_authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn origin_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host.is_empty() {
        return None;
    }

    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Checks whether a URL belongs to the crawl's origin
///
/// The comparison is an exact match on the authority string. Scheme is
/// ignored, and `www.` prefixes or subdomains are never folded together.
pub fn same_origin(url: &Url, authority: &str) -> bool {
    origin_authority(url).is_some_and(|candidate| candidate == authority)
}
