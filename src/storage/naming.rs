/// Fallback base name for the site root and for paths that sanitize to nothing
const ROOT_NAME: &str = "root";

/// Extension given to every saved page
pub(crate) const EXTENSION: &str = "html";

/// Derives a filesystem-safe file name from a URL path
///
/// # Naming Rules
///
/// 1. Empty path or `/` → `root`
/// 2. Strip the leading `/`
/// 3. Replace each remaining `/` with `__`
/// 4. Drop anything from the first `?` or `#` onwards
/// 5. Replace every character outside `[A-Za-z0-9_.-]` with `_`
/// 6. Fall back to `root` if nothing is left
/// 7. Append `.html`
///
/// # Examples
///
/// ```
/// use site_path_crawler::storage::sanitize_filename;
///
/// assert_eq!(sanitize_filename("/"), "root.html");
/// assert_eq!(sanitize_filename("/docs/intro"), "docs__intro.html");
/// assert_eq!(sanitize_filename("/a b?x=1"), "a_b.html");
/// ```
pub fn sanitize_filename(path: &str) -> String {
    format!("{}.{}", base_name(path), EXTENSION)
}

fn base_name(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return ROOT_NAME.to_string();
    }

    let name = path.strip_prefix('/').unwrap_or(path).replace('/', "__");

    let name = match name.find(['?', '#']) {
        Some(idx) => &name[..idx],
        None => name.as_str(),
    };

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        ROOT_NAME.to_string()
    } else {
        sanitized
    }
}
