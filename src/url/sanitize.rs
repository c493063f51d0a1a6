/// Name used when a title or basename leaves nothing after sanitization
pub const FALLBACK_NAME: &str = "untitled";

/// Longest name `clean_filename` returns, leaving room for an extension
/// under the usual 255-byte filename limit
pub const MAX_NAME_LEN: usize = 200;

/// Makes a string safe to use as a filename
///
/// Every character that is not an ASCII letter or digit is replaced with `_`,
/// and the result is cut to [`MAX_NAME_LEN`] characters. An empty input
/// yields [`FALLBACK_NAME`] so no file is ever named `.html`.
///
/// # Examples
///
/// ```
/// use site_grab::url::clean_filename;
///
/// assert_eq!(clean_filename("My Page!"), "My_Page_");
/// assert_eq!(clean_filename(""), "untitled");
/// ```
pub fn clean_filename(name: &str) -> String {
    if name.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    name.chars()
        .take(MAX_NAME_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Derives the filename for a stylesheet from its URL
///
/// Takes everything after the last `/` of the URL as written (query string
/// included) and sanitizes it with [`clean_filename`].
pub fn css_filename(css_url: &str) -> String {
    let basename = css_url.rsplit('/').next().unwrap_or(css_url);
    clean_filename(basename)
}
