//! HTML parser for extracting page title, metadata, links and stylesheets
//!
//! Parsing never fails: html5ever recovers from malformed markup, and every
//! missing element maps to a sentinel (`"untitled"` title, empty value,
//! empty list).

use crate::url::{resolve_link, FALLBACK_NAME};
use indexmap::IndexMap;
use scraper::{Html, Selector};
use url::Url;

/// Structured data extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfo {
    /// `<meta>` key/value pairs in first-seen key order; later duplicates win
    pub metadata: IndexMap<String, String>,

    /// Absolute URLs of every `<a href>` in document order
    pub links: Vec<String>,

    /// Absolute URLs of every `<link rel="stylesheet" href>` in document order
    pub css_links: Vec<String>,
}

/// Everything the crawler needs from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Trimmed text of the first `<title>`, or `"untitled"`
    pub title: String,

    pub info: SiteInfo,
}

/// Parses HTML content and extracts title, metadata, links and stylesheets
///
/// # Extraction Rules
///
/// - Metadata: every `<meta>`; key is `name` if non-empty, else `property`;
///   value is `content` or the empty string
/// - Links: every `<a>` with an `href`, resolved against `base_url`
/// - Stylesheets: every `<link>` whose `rel` contains `stylesheet` and that
///   has an `href`, resolved against `base_url`
///
/// No scheme filtering happens here: `mailto:` and `javascript:` hrefs are
/// reported like any other link.
///
/// # Example
///
/// ```
/// use site_grab::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url);
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.info.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        info: SiteInfo {
            metadata: extract_metadata(&document),
            links: extract_links(&document, base_url),
            css_links: extract_stylesheets(&document, base_url),
        },
    }
}

/// Extracts metadata, links and stylesheets without the title
pub fn extract_site_info(html: &str, base_url: &Url) -> SiteInfo {
    parse_html(html, base_url).info
}

/// Returns the page title, or `"untitled"` if absent or blank
pub fn page_title(html: &str) -> String {
    extract_title(&Html::parse_document(html))
}

fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return FALLBACK_NAME.to_string();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn extract_metadata(document: &Html) -> IndexMap<String, String> {
    let mut metadata = IndexMap::new();

    if let Ok(meta_selector) = Selector::parse("meta") {
        for element in document.select(&meta_selector) {
            let attrs = element.value();
            let key = attrs
                .attr("name")
                .filter(|name| !name.is_empty())
                .or_else(|| attrs.attr("property").filter(|p| !p.is_empty()));

            if let Some(key) = key {
                let value = attrs.attr("content").unwrap_or_default();
                metadata.insert(key.to_string(), value.to_string());
            }
        }
    }

    metadata
}

fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

fn extract_stylesheets(document: &Html, base_url: &Url) -> Vec<String> {
    let mut css_links = Vec::new();

    if let Ok(link_selector) = Selector::parse("link[rel][href]") {
        for element in document.select(&link_selector) {
            let attrs = element.value();
            let is_stylesheet = attrs.attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("stylesheet"))
            });
            if !is_stylesheet {
                continue;
            }

            if let Some(href) = attrs.attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    css_links.push(absolute_url);
                }
            }
        }
    }

    css_links
}
