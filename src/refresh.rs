//! Refresh cycle: fetch the news page, extract items, publish the feed.
//!
//! A refresh is one complete fetch → parse → extract → publish attempt. Any
//! failure before the publish step aborts the cycle without touching the
//! store, so the previously published document (if any) stays authoritative
//! until the next successful cycle.
//!
//! [`run`] drives the schedule: one refresh immediately at startup, then one
//! per hour, strictly sequentially: a refresh that somehow outlasted the
//! interval delays the next tick instead of overlapping it.

use crate::feed::{self, CHANNEL_DESCRIPTION, CHANNEL_LINK, CHANNEL_TITLE};
use crate::scrapers::hytale;
use crate::store::FeedStore;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info, instrument};

/// Time between scheduled refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Upper bound on one page fetch, so a hung upstream cannot stall the
/// scheduler indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Ways a refresh cycle can fail.
///
/// Date parsing is deliberately absent: an unparsable on-page date degrades
/// to an empty `pubDate` inside the extractor and is never propagated.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Network-level failure (DNS, connection, TLS, timeout).
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),
    /// Upstream answered with a non-success status.
    #[error("unexpected status fetching page: {0}")]
    Status(StatusCode),
    /// Response body the HTML parser cannot produce a tree for.
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

/// Build the shared HTTP client used by every refresh.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder().timeout(FETCH_TIMEOUT).build()
}

/// Run one refresh cycle against the live news page.
pub async fn refresh(client: &Client, store: &FeedStore) -> Result<(), RefreshError> {
    refresh_from(client, hytale::NEWS_URL, store).await
}

#[instrument(level = "info", skip_all, fields(%url))]
async fn refresh_from(client: &Client, url: &str, store: &FeedStore) -> Result<(), RefreshError> {
    info!("Scraping Hytale news");
    let body = fetch_page(client, url).await?;

    // `Html` is not `Send`; keep it scoped so the future stays spawnable.
    let items = {
        let document = parse_document(&body)?;
        hytale::scrape_news_items(&document)
    };

    let feed = feed::build_feed(CHANNEL_TITLE, CHANNEL_LINK, CHANNEL_DESCRIPTION, items);
    let count = feed.channel.items.len();
    store.publish(feed).await;

    info!(count, "Scraped news items");
    Ok(())
}

/// Fetch the page body, failing on transport errors and non-2xx statuses.
async fn fetch_page(client: &Client, url: &str) -> Result<String, RefreshError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RefreshError::Status(status));
    }
    Ok(response.text().await?)
}

/// Parse the body into a DOM tree.
///
/// The parser recovers from arbitrarily malformed markup, so the only body
/// it cannot turn into a usable tree is an empty one.
fn parse_document(body: &str) -> Result<Html, RefreshError> {
    if body.trim().is_empty() {
        return Err(RefreshError::Parse("empty response body".to_string()));
    }
    Ok(Html::parse_document(body))
}

/// Drive refreshes for the lifetime of the process.
///
/// The startup refresh may fail without consequence beyond a log line; the
/// server keeps running and answers `/feed.xml` with 503 until some later
/// cycle succeeds.
pub async fn run(client: Client, store: FeedStore) {
    if let Err(e) = refresh(&client, &store).await {
        error!(error = %e, "Initial scrape failed");
    }

    let mut ticker = time::interval_at(Instant::now() + REFRESH_INTERVAL, REFRESH_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match refresh(&client, &store).await {
            Ok(()) => info!("Feed updated successfully"),
            Err(e) => error!(error = %e, "Failed to update feed"),
        }
    }
}
