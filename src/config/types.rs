use crate::url::output_folder_name;
use crate::GrabError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Start URL used when neither the config file nor the environment set one
pub const DEFAULT_START_URL: &str = "https://example.com";

/// Maximum link-hops from the start URL (the start page is depth 0)
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Main configuration structure for site-grab
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Maximum depth to crawl from the start URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Pause between page requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            request_delay_ms: 1000,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory under which the per-site folder is created
    #[serde(rename = "root-dir")]
    pub root_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parses the configured start URL
    pub fn start_url(&self) -> Result<Url, GrabError> {
        Ok(Url::parse(&self.crawler.start_url)?)
    }

    /// Folder this run writes into: `<root-dir>/<netloc of start URL>`
    pub fn output_folder(&self) -> Result<PathBuf, GrabError> {
        let start = self.start_url()?;
        Ok(self.output.root_dir.join(output_folder_name(&start)?))
    }

    /// Pause between page requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.crawler.request_delay_ms)
    }
}
