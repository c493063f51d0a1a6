use crate::crawler::fetch_url;
use crate::storage::traits::{SiteStore, StorageResult};
use crate::url::css_filename;
use reqwest::Client;

/// Counts from one [`fetch_and_save_css`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssOutcome {
    pub saved: usize,
    pub failed: usize,
}

/// Fetches each stylesheet and stores its body under `css/`
///
/// The `css` folder is created even when `css_links` is empty. A stylesheet
/// that cannot be fetched is logged and skipped; the rest are still
/// processed. Stylesheets whose sanitized names collide overwrite each other.
///
/// # Returns
///
/// * `Ok(CssOutcome)` - How many stylesheets were saved and how many failed to fetch
/// * `Err(StorageError)` - A write failed
pub async fn fetch_and_save_css(
    client: &Client,
    store: &dyn SiteStore,
    css_links: &[String],
) -> StorageResult<CssOutcome> {
    store.prepare_stylesheet_dir()?;

    let mut outcome = CssOutcome::default();
    for css_url in css_links {
        tracing::info!("Fetching stylesheet {}", css_url);

        match fetch_url(client, css_url).await {
            Ok(body) => {
                store.save_stylesheet(&css_filename(css_url), &body)?;
                outcome.saved += 1;
            }
            Err(_) => {
                // fetch_url already logged the cause
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}
