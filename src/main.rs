//! site-grab main entry point
//!
//! This is the command-line interface for the site-grab crawler.

use anyhow::Context;
use clap::Parser;
use site_grab::config::{resolve_config, Config};
use site_grab::crawler::crawl;
use site_grab::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// site-grab: save a site's pages, metadata and stylesheets to disk
///
/// Starts from one URL, saves each page as `<title>.html` under a folder named
/// after the start URL's host, and follows links depth-first up to a maximum
/// depth. The start URL comes from `--url`, the `SCRAPING_URL` environment
/// variable (a `.env` file is honoured), the config file, or defaults to
/// https://example.com.
#[derive(Parser, Debug)]
#[command(name = "site-grab")]
#[command(version)]
#[command(about = "Save a site's pages, metadata and stylesheets to disk", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Start URL (overrides SCRAPING_URL and the config file)
    #[arg(long)]
    url: Option<String>,

    /// Maximum link depth from the start URL
    #[arg(long)]
    max_depth: Option<u32>,

    /// Pause between page requests in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Directory the per-site output folder is created in
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // A missing .env file is normal
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = resolve_config(
        cli.config.as_deref(),
        |key| std::env::var(key).ok(),
        |config| apply_cli_overrides(config, &cli),
    )
    .context("Failed to load configuration")?;

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_grab=info,warn"),
            1 => EnvFilter::new("site_grab=debug,info"),
            2 => EnvFilter::new("site_grab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.crawler.start_url = url.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.request_delay_ms = delay_ms;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.root_dir = dir.clone();
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== site-grab Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Start URL: {}", config.crawler.start_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Folder: {}", config.output_folder()?.display());

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!("Fetching content of {}", config.crawler.start_url);

    // Fetch failures are counted in the report; only setup and disk errors end up here
    match crawl(config).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
