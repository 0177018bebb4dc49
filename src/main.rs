//! # Hytale RSS
//!
//! A small service that scrapes the [Hytale news page](https://hytale.com/news)
//! and republishes it as an RSS 2.0 feed.
//!
//! ## Endpoints
//!
//! - `GET /`: landing page linking to the feed
//! - `GET /feed.xml`: the current feed (503 until the first successful
//!   scrape)
//!
//! ## Architecture
//!
//! A background task scrapes the news page once at startup and then once an
//! hour: fetch → parse → extract → build feed → publish. The published
//! document lives in a [`store::FeedStore`] shared with the HTTP handlers,
//! which read it without ever waiting on a scrape. A failed scrape is logged
//! and leaves the previously published feed in place.
//!
//! There is no configuration surface: source URL, schedule, channel
//! metadata, and port are fixed. `RUST_LOG` controls log filtering.

use std::error::Error;
use tracing::info;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod dom;
mod feed;
mod models;
mod refresh;
mod scrapers;
mod server;
mod store;

use store::FeedStore;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("hytale_rss starting up");

    let store = FeedStore::new();
    let client = refresh::http_client()?;

    // Initial scrape plus the hourly updater; failures are logged inside and
    // never take the server down.
    tokio::spawn(refresh::run(client, store.clone()));

    info!(port = server::PORT, "Server starting");
    let _ = server::rocket(store).launch().await?;

    Ok(())
}
