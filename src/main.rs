//! Contact-Sweep main entry point
//!
//! Serves the HTTP API by default; `--url` runs a single crawl from the
//! command line and prints the record instead.

use clap::Parser;
use contact_sweep::config::{default_config, load_config};
use contact_sweep::crawler::run_crawl;
use contact_sweep::storage::SnapshotStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Contact-Sweep: a bounded contact-information crawler
///
/// Crawls a seed URL plus a bounded set of same-domain pages, extracts
/// emails, phone numbers, and social profile links, and snapshots the
/// deduplicated record per host.
#[derive(Parser, Debug)]
#[command(name = "contact-sweep")]
#[command(version)]
#[command(about = "A bounded contact-information crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Crawl a single URL and print the record instead of serving the API
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => {
            tracing::debug!("No config file given, using defaults");
            default_config()
        }
    };

    if let Some(url) = cli.url {
        handle_single_crawl(&url, &config).await
    } else {
        contact_sweep::server::serve(config).await?;
        Ok(())
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_sweep=info,warn"),
            1 => EnvFilter::new("contact_sweep=debug,info"),
            2 => EnvFilter::new("contact_sweep=trace,debug"),
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

/// Handles the --url mode: one crawl, record printed to stdout
async fn handle_single_crawl(
    url: &str,
    config: &contact_sweep::Config,
) -> anyhow::Result<()> {
    let result = run_crawl(url, &config.crawler).await?;

    let store = contact_sweep::storage::JsonSnapshotStore::new(&config.output.data_dir);
    let path = store.save(&result)?;
    tracing::info!("Snapshot saved to {}", path.display());

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
