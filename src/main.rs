//! Bestiary - a terminal field guide to a remote creature catalog
//!
//! Starts the response cache and its background sweeper, builds the catalog
//! client on top, and hands control to the interactive prompt.

mod cache;
mod catalog;
mod collection;
mod config;
mod error;
mod repl;
mod tasks;

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::Cache;
use catalog::CatalogClient;
use config::Config;
use repl::ReplState;

/// Main entry point for the bestiary.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its background sweeper
/// 4. Build the catalog client on top of the cache
/// 5. Run the prompt loop until the session ends
/// 6. Shut the sweeper down cleanly
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the prompt stays clean; RUST_LOG overrides the
    // default of warnings only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestiary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "starting bestiary: api={}, stale_limit={}s, page_limit={}",
        config.api_base_url, config.stale_secs, config.page_limit
    );

    let (cache, sweeper) = Cache::new(Duration::from_secs(config.stale_secs));
    let client = CatalogClient::new(&config, cache)?;
    let mut state = ReplState::new(client);

    println!("Welcome to the bestiary! Type \"help\" to see what you can do.");
    println!();
    let session = repl::run(&mut state).await;

    // Let the sweep task exit cleanly instead of dying with the process,
    // even when the prompt loop ends with an error.
    sweeper.shutdown().await;
    info!("bestiary closed");

    session?;
    Ok(())
}
