use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Environment variable that overrides the configured start URL
pub const START_URL_ENV: &str = "SCRAPING_URL";

/// Reads and parses a configuration file without validating it
///
/// Validation waits until environment and command-line overrides have been
/// merged in [`resolve_config`].
fn read_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    Ok(toml::from_str(&content)?)
}

/// Overrides config values from an environment lookup
///
/// The lookup is injected so callers decide where values come from; the
/// binary passes `std::env::var` after loading `.env`.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(START_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("Start URL taken from {}", START_URL_ENV);
        config.crawler.start_url = url.trim().to_string();
    }
}

/// Builds the effective configuration for a run
///
/// Starts from the file at `path` when given, or the defaults otherwise,
/// applies environment overrides, then `overrides` (command-line flags), and
/// validates the result once everything is merged.
pub fn resolve_config<F, O>(
    path: Option<&Path>,
    lookup: F,
    overrides: O,
) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    O: FnOnce(&mut Config),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config, lookup);
    overrides(&mut config);
    validate(&config)?;

    Ok(config)
}
