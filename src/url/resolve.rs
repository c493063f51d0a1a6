use url::Url;

/// Resolves an `href` against the URL of the page it was found on
///
/// Relative references follow standard URL-join rules (`../`, `/path`,
/// `?query`, `#fragment`, `//host/path`). A reference that already parses as
/// an absolute URL is returned as written, so `http://b.com` is not
/// rewritten to `http://b.com/`.
///
/// Returns None only if the reference cannot be joined to the base.
///
/// # Examples
///
/// ```
/// use site_grab::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://a.com/x/").unwrap();
/// assert_eq!(resolve_link("../y", &base).as_deref(), Some("https://a.com/y"));
/// assert_eq!(resolve_link("/z", &base).as_deref(), Some("https://a.com/z"));
/// assert_eq!(resolve_link("http://b.com", &base).as_deref(), Some("http://b.com"));
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    match base_url.join(href) {
        Ok(absolute_url) => Some(absolute_url.into()),
        Err(e) => {
            tracing::debug!("Dropping unresolvable link {:?} on {}: {}", href, base_url, e);
            None
        }
    }
}
