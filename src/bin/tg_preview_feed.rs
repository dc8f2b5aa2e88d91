//! Fetch channel web previews and write their feeds.
//!
//! Configuration comes from `INPUT_OUTPUT-DIR`, `INPUT_TELEGRAM-CHANNELS` and
//! `INPUT_FORMATS`. Logging honours `RUST_LOG` and `LOG_FORMAT=json`.

use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tg_preview_feed::config::Config;
use tg_preview_feed::feed::{self, Feed};
use tg_preview_feed::fetch::Fetcher;
use tg_preview_feed::Options;

fn main() {
    // No subscriber means `error!` would go nowhere.
    if let Err(e) = init_tracing() {
        eprintln!("Fatal error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run() {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        channels = ?config.channels,
        formats = ?config.formats,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let options = Options::default();
    let fetcher = Fetcher::new().context("Failed to build HTTP client")?;

    let mut feeds = Vec::with_capacity(config.channels.len());
    for channel in &config.channels {
        match channel_feed(&fetcher, channel, &options) {
            Ok(feed) => {
                info!(channel = %channel, items = feed.items.len(), "Channel processed");
                feeds.push(feed);
            }
            Err(e) => warn!(channel = %channel, "Skipping channel: {e:#}"),
        }
    }

    if feeds.is_empty() {
        bail!("no channel page could be fetched and parsed");
    }

    let feed = if feeds.len() == 1 {
        feeds.remove(0)
    } else {
        feed::merge(feeds)
    };

    feed::save_to_dir(&feed, &config.output_dir, &config.formats)
        .with_context(|| format!("Failed to write feeds to {}", config.output_dir.display()))?;

    Ok(())
}

fn channel_feed(fetcher: &Fetcher, channel: &str, options: &Options) -> Result<Feed> {
    let record = fetcher
        .fetch_page(channel, options)
        .with_context(|| format!("Failed to process channel {channel}"))?;
    Ok(Feed::from_page(&record))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
