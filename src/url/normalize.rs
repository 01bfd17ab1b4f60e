use crate::UrlError;
use url::Url;

/// Schemes that never lead to a crawlable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Normalizes a user-supplied site address into the crawl's base URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `http://` when no `http://` or `https://` scheme is given
/// 3. Strip trailing slashes
/// 4. Parse; reject non-HTTP(S) schemes and URLs without a host
///
/// # Arguments
///
/// * `input` - The site address as typed by the user
///
/// # Returns
///
/// * `Ok(Url)` - The base URL used for fetching and link resolution
/// * `Err(UrlError)` - The address could not be turned into an HTTP(S) URL
///
/// # Examples
///
/// ```
/// use fishcat::url::normalize_site_url;
///
/// let url = normalize_site_url("blog.example.com/").unwrap();
/// assert_eq!(url.as_str(), "http://blog.example.com/");
/// ```
pub fn normalize_site_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty site address".to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        let scheme = trimmed.split("://").next().unwrap_or_default();
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            scheme
        )));
    } else {
        format!("http://{}", trimmed)
    };

    let url = Url::parse(with_scheme.trim_end_matches('/'))
        .map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Resolves an `href` against the base URL into an absolute HTTP(S) URL
///
/// Returns None if the link cannot be followed:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel: schemes and data: URIs
/// - hrefs that do not resolve to an HTTP(S) URL
pub fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
