use crate::UrlError;
use url::Url;

/// Normalizes a URL for visited-set membership
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Scheme and host are lowercased and default ports elided by the parser
/// 3. An empty path on a hierarchical URL becomes `/`
/// 4. Remove fragment (everything after #)
///
/// Query strings and path case are left untouched: two URLs that differ there
/// may serve different content.
///
/// # Examples
///
/// ```
/// use site_grab::url::normalize_url;
///
/// let url = normalize_url("HTTPS://Example.COM:443#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    url.set_fragment(None);
    Ok(url)
}

/// Returns the key under which a URL is recorded in the visited set
///
/// Strings that do not parse as URLs are keyed verbatim so they still
/// deduplicate against themselves.
pub fn visit_key(url_str: &str) -> String {
    match normalize_url(url_str) {
        Ok(url) => url.into(),
        Err(_) => url_str.to_string(),
    }
}
