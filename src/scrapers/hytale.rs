//! Hytale news page extractor.
//!
//! This module turns the parsed DOM of [Hytale's news listing](https://hytale.com/news)
//! into [`NewsItem`] values. One post is represented on the page by a
//! `div.postWrapper` container; within it, the interesting fields are marked
//! by class names:
//!
//! - `h4.post__details__heading`: post title
//! - `a.post`: post link (`href` may be relative)
//! - `span.post__details__meta`: holds a `span.post__details__meta__date`
//!   direct child with a human date like "March 1st 2024"
//! - `span.post__details__body`: post body text
//!
//! These class contracts are brittle coupling to the upstream markup and are
//! deliberately confined to this module.

use crate::dom;
use crate::models::NewsItem;
use chrono::{NaiveDate, NaiveTime};
use scraper::{ElementRef, Html};

/// The news listing page this scraper understands.
pub const NEWS_URL: &str = "https://hytale.com/news";

/// Origin prefixed onto relative post links.
const BASE_URL: &str = "https://hytale.com";

const POST_WRAPPER_CLASS: &str = "postWrapper";
const HEADING_CLASS: &str = "post__details__heading";
const LINK_CLASS: &str = "post";
const META_CLASS: &str = "post__details__meta";
const DATE_CLASS: &str = "post__details__meta__date";
const BODY_CLASS: &str = "post__details__body";

/// Descriptions longer than this many characters are cut and marked.
const DESCRIPTION_LIMIT: usize = 200;

/// On-page date format, e.g. "March 5 2024" (after ordinal stripping).
const DATE_FORMAT: &str = "%B %d %Y";

/// Extract every news item from a parsed news listing page.
///
/// Walks the whole tree for `div.postWrapper` candidates (no depth limit, no
/// count bound; nested wrappers each count) and extracts one item per
/// candidate. Items whose title comes out empty are dropped; the title is
/// the sole validity gate, all other fields may be empty.
///
/// Items are returned in document order.
pub fn scrape_news_items(document: &Html) -> Vec<NewsItem> {
    dom::find_descendants(document.root_element(), |el| {
        el.value().name() == "div" && dom::has_class(el, POST_WRAPPER_CLASS)
    })
    .into_iter()
    .map(extract_post)
    .filter(|item| !item.title.is_empty())
    .collect()
}

/// Extract one [`NewsItem`] from a post wrapper subtree.
///
/// Scans all descendants, at any nesting depth, for the four field markers.
/// A later match overwrites an earlier one for title, link, and date; only
/// the first body match is kept.
fn extract_post(wrapper: ElementRef<'_>) -> NewsItem {
    let mut item = NewsItem::default();

    for el in dom::find_descendants(wrapper, |_| true) {
        match el.value().name() {
            "h4" if dom::has_class(el, HEADING_CLASS) => {
                item.title = dom::text_content(el);
            }
            "a" if dom::has_class(el, LINK_CLASS) => {
                let href = dom::attr(el, "href");
                if !href.is_empty() {
                    item.link = absolutize(href);
                }
            }
            "span" => {
                if dom::has_class(el, META_CLASS) {
                    item.date = extract_date(el);
                }
                if item.description.is_empty() && dom::has_class(el, BODY_CLASS) {
                    item.description = truncate_description(&dom::text_content(el));
                }
            }
            _ => {}
        }
    }

    item
}

/// Pull a normalized date out of a meta span.
///
/// Only direct children are inspected for the date span. Ordinal suffixes
/// ("1st", "2nd", ...) are stripped before parsing; on parse failure the
/// date stays empty rather than failing the extraction.
fn extract_date(meta: ElementRef<'_>) -> String {
    let mut date = String::new();

    for child in meta.children().filter_map(ElementRef::wrap) {
        if child.value().name() == "span" && dom::has_class(child, DATE_CLASS) {
            let full_date = dom::text_content(child);
            if full_date.is_empty() {
                continue;
            }
            if let Ok(parsed) = NaiveDate::parse_from_str(&strip_ordinal_suffixes(&full_date), DATE_FORMAT) {
                date = format_pub_date(parsed);
            }
        }
    }

    date
}

/// Remove the ordinal suffixes "st", "nd", "rd", "th" as plain substrings.
///
/// The match is not anchored to digits, so literal occurrences inside other
/// words are stripped too ("August" becomes "Augu" and will not parse).
fn strip_ordinal_suffixes(date: &str) -> String {
    ["st", "nd", "rd", "th"]
        .iter()
        .fold(date.to_string(), |cleaned, suffix| cleaned.replace(suffix, ""))
}

/// Format a parsed date as RFC-1123 with a numeric zone, at midnight UTC.
fn format_pub_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format("%a, %d %b %Y %H:%M:%S %z")
        .to_string()
}

/// Make a post link absolute: an `href` that already carries a scheme is
/// kept verbatim, anything else gets the site origin prefixed.
fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{BASE_URL}{href}")
    }
}

/// Cut a description to at most [`DESCRIPTION_LIMIT`] characters, appending
/// a `...` marker when anything was cut.
fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let kept: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
