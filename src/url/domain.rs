use crate::UrlError;
use url::Url;

/// Derives the output folder name for a crawl from its start URL
///
/// The folder is named after the URL's network location: the host, plus
/// `:port` when the URL carries a non-default port. Default ports are elided
/// by the URL parser, so `https://example.com:443/` yields `example.com`.
///
/// # Arguments
///
/// * `url` - The start URL of the crawl
///
/// # Returns
///
/// * `Ok(String)` - The folder name
/// * `Err(UrlError)` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_grab::url::output_folder_name;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(output_folder_name(&url).unwrap(), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(output_folder_name(&url).unwrap(), "127.0.0.1:8080");
/// ```
pub fn output_folder_name(url: &Url) -> Result<String, UrlError> {
    let host = url
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
