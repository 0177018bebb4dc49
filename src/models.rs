//! Data models for scraped news items and the published RSS document.
//!
//! This module defines the two shapes data takes as it moves through the
//! pipeline:
//! - [`NewsItem`]: one news entry as extracted from the source page, alive
//!   only for the duration of a single refresh cycle
//! - [`Rss`] / [`Channel`] / [`Item`]: the immutable RSS 2.0 document built
//!   from those items and held by the feed store until the next refresh
//!   replaces it

/// One news entry extracted from the source page.
///
/// All fields other than `title` are best-effort: a post whose markup is
/// missing the link, date, or body markers still yields an item with those
/// fields empty. An item with an empty `title` is dropped before it reaches
/// the feed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Trimmed heading text. Empty means the item is discarded.
    pub title: String,
    /// Absolute URL of the post.
    pub link: String,
    /// RFC-1123 date-time with numeric zone, or empty if the on-page date
    /// could not be parsed.
    pub date: String,
    /// Trimmed body text, truncated to 200 characters with a `...` marker.
    pub description: String,
}

/// Root of the RSS 2.0 document.
///
/// Built once per refresh cycle and never mutated afterwards; the feed store
/// swaps whole documents.
#[derive(Debug, PartialEq, Eq)]
pub struct Rss {
    pub version: String,
    pub channel: Channel,
}

/// Channel metadata plus the ordered item list.
#[derive(Debug, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Items in document order of appearance on the source page.
    pub items: Vec<Item>,
}

/// One `<item>` element of the channel.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
}
